use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn command_k_opens_search() {
    assert_eq!(shortcut_for("k", true), Some(ShellShortcut::OpenSearch));
    assert_eq!(shortcut_for("K", true), Some(ShellShortcut::OpenSearch));
}

#[test]
fn plain_k_is_ignored() {
    assert_eq!(shortcut_for("k", false), None);
}

#[test]
fn escape_dismisses_with_or_without_modifier() {
    assert_eq!(shortcut_for("Escape", false), Some(ShellShortcut::Dismiss));
    assert_eq!(shortcut_for("Escape", true), Some(ShellShortcut::Dismiss));
    assert_eq!(shortcut_for("Enter", true), None);
}

#[test]
fn dispatch_forwards_until_detached() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let dispatch = ShortcutDispatch::new(move |shortcut| sink.borrow_mut().push(shortcut));

    assert_eq!(dispatch.dispatch("k", true), Some(ShellShortcut::OpenSearch));
    assert_eq!(dispatch.dispatch("a", true), None);
    dispatch.detach();
    assert!(!dispatch.is_attached());
    assert_eq!(dispatch.dispatch("Escape", false), None);

    assert_eq!(*seen.borrow(), vec![ShellShortcut::OpenSearch]);
}

thread_local! {
    static MOUNTED_DISPATCH: RefCell<Option<ShortcutDispatch>> = const { RefCell::new(None) };
    static DELIVERED: RefCell<Vec<ShellShortcut>> = const { RefCell::new(Vec::new()) };
}

fn ShortcutHost() -> Element {
    let dispatch = use_shortcut_dispatch(|shortcut| {
        DELIVERED.with(|delivered| delivered.borrow_mut().push(shortcut));
    });
    MOUNTED_DISPATCH.with(|slot| *slot.borrow_mut() = Some(dispatch));
    rsx! { div {} }
}

#[test]
fn unmounting_the_host_stops_delivery() {
    let mut dom = VirtualDom::new(ShortcutHost);
    dom.rebuild_in_place();

    let dispatch = MOUNTED_DISPATCH
        .with(|slot| slot.borrow().clone())
        .expect("host rendered");
    assert_eq!(dispatch.dispatch("Escape", false), Some(ShellShortcut::Dismiss));

    drop(dom);

    assert!(!dispatch.is_attached());
    assert_eq!(dispatch.dispatch("Escape", false), None);
    assert_eq!(dispatch.dispatch("k", true), None);
    DELIVERED.with(|delivered| assert_eq!(*delivered.borrow(), vec![ShellShortcut::Dismiss]));
}
