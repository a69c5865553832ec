use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::state::use_app_actions;

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellShortcut {
    OpenSearch,
    Dismiss,
}

/// ⌘K / Ctrl+K opens search, Escape closes overlays.
pub fn shortcut_for(key: &str, command_modifier: bool) -> Option<ShellShortcut> {
    match key {
        "Escape" => Some(ShellShortcut::Dismiss),
        "k" | "K" if command_modifier => Some(ShellShortcut::OpenSearch),
        _ => None,
    }
}

type ShortcutTarget = Rc<dyn Fn(ShellShortcut)>;

/// Routes key presses to the component that owns it until detached.
#[derive(Clone)]
pub struct ShortcutDispatch {
    target: Rc<RefCell<Option<ShortcutTarget>>>,
}

impl ShortcutDispatch {
    pub fn new(target: impl Fn(ShellShortcut) + 'static) -> Self {
        Self {
            target: Rc::new(RefCell::new(Some(Rc::new(target)))),
        }
    }

    /// Forwards the shortcut bound to `key`, if any, and reports what was sent.
    pub fn dispatch(&self, key: &str, command_modifier: bool) -> Option<ShellShortcut> {
        let shortcut = shortcut_for(key, command_modifier)?;
        let target = self.target.borrow().clone()?;
        target(shortcut);
        Some(shortcut)
    }

    pub fn detach(&self) {
        self.target.borrow_mut().take();
    }

    pub fn is_attached(&self) -> bool {
        self.target.borrow().is_some()
    }
}

/// Dispatch handle that stops forwarding when the calling component unmounts.
pub fn use_shortcut_dispatch(target: impl Fn(ShellShortcut) + 'static) -> ShortcutDispatch {
    let dispatch = use_hook(|| ShortcutDispatch::new(target));

    use_drop({
        let dispatch = dispatch.clone();
        move || dispatch.detach()
    });

    dispatch
}

/// Listens for shell shortcuts on the whole window while the CRM is mounted.
pub fn use_shell_shortcuts() {
    let actions = use_app_actions();

    let shortcuts = use_coroutine(move |mut rx: UnboundedReceiver<ShellShortcut>| async move {
        while let Some(shortcut) = rx.next().await {
            match shortcut {
                ShellShortcut::OpenSearch => actions.open_search(),
                ShellShortcut::Dismiss => actions.dismiss_overlays(),
            }
        }
    });

    let dispatch = use_shortcut_dispatch(move |shortcut| shortcuts.send(shortcut));

    #[cfg(target_arch = "wasm32")]
    {
        let listener = use_hook(|| Rc::new(RefCell::new(browser::KeyListener::attach(dispatch))));
        use_drop(move || {
            listener.borrow_mut().take();
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dispatch;
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use super::ShortcutDispatch;

    /// Window `keydown` listener, removed again on drop.
    pub(super) struct KeyListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    }

    impl KeyListener {
        pub(super) fn attach(dispatch: ShortcutDispatch) -> Option<Self> {
            let Some(window) = web_sys::window() else {
                tracing::warn!("no window, shell shortcuts disabled");
                return None;
            };

            let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                move |event: web_sys::KeyboardEvent| {
                    let command = event.meta_key() || event.ctrl_key();
                    if dispatch.dispatch(&event.key(), command).is_some() {
                        event.prevent_default();
                    }
                },
            );

            if let Err(err) =
                window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "failed to register shell shortcuts");
                return None;
            }
            Some(Self { window, callback })
        }
    }

    impl Drop for KeyListener {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
        }
    }
}
