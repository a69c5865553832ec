use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::effects::{mount_all, ColorScheme, EffectSlot, GradientBackdrop, ScrollReveal};
use crate::state::use_app_state;

/// Keeps `<html class="dark">` in sync with the shell state.
pub fn use_color_scheme() {
    let state = use_app_state();
    let dark = use_memo(move || state.read().shell.dark_mode);

    use_effect(move || {
        let _ = mount_all(&[&ColorScheme { dark: dark() }]);
    });
}

/// Scroll reveal and hero backdrop, mounted once the landing page is in the
/// DOM and torn down with it.
pub fn use_landing_effects() {
    let state = use_app_state();
    let ready = use_memo(move || !state.read().landing.is_loading());
    let slot = use_hook(|| Rc::new(RefCell::new(EffectSlot::default())));

    use_effect({
        let slot = slot.clone();
        move || {
            let ready = ready();
            slot.borrow_mut().mount_when_ready(ready, || {
                mount_all(&[&ScrollReveal::default(), &GradientBackdrop::default()])
            });
        }
    });

    use_drop(move || slot.borrow_mut().clear());
}
