use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::state::use_app_actions;

/// Placeholder delay before the dashboard and analytics render their figures.
pub const PLACEHOLDER_DELAY_MS: u32 = 1_000;

const LOADING_TICK_MS: u32 = 30;

/// `true` until `delay_ms` has elapsed after the first render.
pub fn use_loading_delay(delay_ms: u32) -> Signal<bool> {
    let mut loading = use_signal(|| true);

    use_future(move || async move {
        #[cfg(target_arch = "wasm32")]
        TimeoutFuture::new(delay_ms).await;
        #[cfg(not(target_arch = "wasm32"))]
        let _ = delay_ms;

        loading.set(false);
    });

    loading
}

/// Drives the landing page loading counter up to 100.
pub fn use_landing_counter() {
    let actions = use_app_actions();
    let state = crate::state::use_app_state();

    use_future(move || async move {
        while state.peek().landing.is_loading() {
            #[cfg(target_arch = "wasm32")]
            TimeoutFuture::new(LOADING_TICK_MS).await;
            actions.tick_loading();
        }
        tracing::debug!(tick_ms = LOADING_TICK_MS, "landing loading finished");
    });
}
