//! Browser-side presentation effects.
//!
//! Each effect attaches itself to the live document through
//! [`PresentationEffect::mount`] and stays attached until the returned
//! [`Mounted`] handle is dropped. Outside the browser mounting is a no-op so
//! the rest of the crate stays testable on the host.

use thiserror::Error;

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EffectError {
    #[error("no browser document available")]
    NoDocument,
    #[error("javascript error in {effect}: {message}")]
    Js {
        effect: &'static str,
        message: String,
    },
}

pub trait PresentationEffect {
    fn name(&self) -> &'static str;

    fn mount(&self) -> Result<Mounted, EffectError>;
}

/// Live effect; dropping it detaches the effect from the document.
#[must_use = "dropping the handle detaches the effect"]
pub struct Mounted {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Mounted {
    /// Effect that leaves nothing to clean up.
    pub fn settled() -> Self {
        Self { teardown: None }
    }

    pub fn with_teardown(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl std::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mounted")
            .field("teardown", &self.teardown.is_some())
            .finish()
    }
}

/// Effects of one page, mounted at most once until cleared.
#[derive(Debug, Default)]
pub struct EffectSlot {
    mounted: Option<Vec<Mounted>>,
}

impl EffectSlot {
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Runs `mount` the first time `ready` holds; later calls do nothing.
    pub fn mount_when_ready(&mut self, ready: bool, mount: impl FnOnce() -> Vec<Mounted>) -> bool {
        if !ready || self.is_mounted() {
            return false;
        }
        self.mounted = Some(mount());
        true
    }

    /// Tears every mounted effect down.
    pub fn clear(&mut self) {
        self.mounted = None;
    }
}

/// Adds `visible_class` to every element matching `selector` the first time it
/// scrolls into view.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollReveal {
    pub selector: &'static str,
    pub visible_class: &'static str,
    pub threshold: f64,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self {
            selector: "[data-reveal]",
            visible_class: "is-revealed",
            threshold: 0.15,
        }
    }
}

/// Toggles the `dark` class on the root `<html>` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub dark: bool,
}

impl ColorScheme {
    pub const DARK_CLASS: &'static str = "dark";

    /// Root classes after applying the scheme to `current`.
    pub fn apply_to(&self, current: &str) -> String {
        let mut classes: Vec<&str> = current
            .split_whitespace()
            .filter(|class| *class != Self::DARK_CLASS)
            .collect();
        if self.dark {
            classes.push(Self::DARK_CLASS);
        }
        classes.join(" ")
    }
}

/// Animated gradient layer behind the hero section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientBackdrop {
    pub element_id: &'static str,
    pub palette: [&'static str; 3],
}

impl Default for GradientBackdrop {
    fn default() -> Self {
        Self {
            element_id: "hero-backdrop",
            palette: ["#00F5FF", "#9B51E0", "#FF00A8"],
        }
    }
}

impl GradientBackdrop {
    /// Inline style properties applied to the backdrop element.
    pub fn properties(&self) -> [(&'static str, String); 3] {
        let [a, b, c] = self.palette;
        [
            (
                "background",
                format!(
                    "radial-gradient(circle at 20% 30%, {a}33, transparent 45%), \
                     radial-gradient(circle at 80% 20%, {b}33, transparent 40%), \
                     radial-gradient(circle at 50% 80%, {c}26, transparent 50%)"
                ),
            ),
            ("background-size", "200% 200%".to_string()),
            (
                "animation",
                "gradient-drift 18s ease-in-out infinite alternate".to_string(),
            ),
        ]
    }
}

/// Whether the visitor's system asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |query| query.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Mounts every effect, logging failures instead of aborting the page.
pub fn mount_all(effects: &[&dyn PresentationEffect]) -> Vec<Mounted> {
    effects
        .iter()
        .filter_map(|effect| match effect.mount() {
            Ok(mounted) => Some(mounted),
            Err(err) => {
                tracing::warn!(effect = effect.name(), %err, "presentation effect not mounted");
                None
            }
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    use super::{EffectError, Mounted};

    pub(super) fn document() -> Result<Document, EffectError> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or(EffectError::NoDocument)
    }

    pub(super) fn js_error(effect: &'static str) -> impl Fn(JsValue) -> EffectError {
        move |value| EffectError::Js {
            effect,
            message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }

    pub(super) fn observe(
        selector: &str,
        visible_class: &'static str,
        threshold: f64,
    ) -> Result<Mounted, EffectError> {
        let document = document()?;
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1(visible_class);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_error("scroll-reveal"))?;

        let nodes = document
            .query_selector_all(selector)
            .map_err(js_error("scroll-reveal"))?;
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                }
            }
        }
        Ok(Mounted::with_teardown(move || {
            observer.disconnect();
            drop(callback);
        }))
    }

    pub(super) fn root_element() -> Result<Element, EffectError> {
        document()?
            .document_element()
            .ok_or(EffectError::NoDocument)
    }

    pub(super) fn html_element_by_id(id: &str) -> Result<Option<HtmlElement>, EffectError> {
        document()?
            .get_element_by_id(id)
            .map(|element| {
                element.dyn_into::<HtmlElement>().map_err(|_| EffectError::Js {
                    effect: "gradient-backdrop",
                    message: format!("#{id} is not an HTML element"),
                })
            })
            .transpose()
    }
}

impl PresentationEffect for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn mount(&self) -> Result<Mounted, EffectError> {
        #[cfg(target_arch = "wasm32")]
        {
            browser::observe(self.selector, self.visible_class, self.threshold)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Mounted::settled())
        }
    }
}

impl PresentationEffect for ColorScheme {
    fn name(&self) -> &'static str {
        "color-scheme"
    }

    fn mount(&self) -> Result<Mounted, EffectError> {
        #[cfg(target_arch = "wasm32")]
        {
            let root = browser::root_element()?;
            root.set_class_name(&self.apply_to(&root.class_name()));
            Ok(Mounted::settled())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Mounted::settled())
        }
    }
}

impl PresentationEffect for GradientBackdrop {
    fn name(&self) -> &'static str {
        "gradient-backdrop"
    }

    fn mount(&self) -> Result<Mounted, EffectError> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(element) = browser::html_element_by_id(self.element_id)? else {
                return Ok(Mounted::settled());
            };
            let style = element.style();
            let names = self.properties().map(|(property, _)| property);
            for (property, value) in self.properties() {
                style
                    .set_property(property, &value)
                    .map_err(browser::js_error("gradient-backdrop"))?;
            }
            Ok(Mounted::with_teardown(move || {
                for property in names {
                    let _ = style.remove_property(property);
                }
            }))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Mounted::settled())
        }
    }
}
