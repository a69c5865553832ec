use dioxus::prelude::*;

use crate::models::Choice;
use crate::services::filter::Selector;

/// Centered overlay; clicking the backdrop closes it.
#[component]
pub fn Modal(#[props(into)] title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),
            div {
                class: "max-h-[90vh] w-full max-w-2xl overflow-y-auto rounded-2xl bg-white p-6 shadow-2xl dark:bg-gray-900",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "mb-4 flex items-start justify-between gap-4",
                    h2 { class: "text-xl font-bold text-gray-900 dark:text-white", "{title}" }
                    button {
                        class: "rounded-lg p-2 text-gray-500 transition hover:bg-gray-100 dark:hover:bg-gray-800",
                        aria_label: "Fermer",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn StatCard(
    #[props(into)] label: String,
    #[props(into)] value: String,
    #[props(default)] hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "rounded-xl border border-gray-200 bg-white p-5 shadow-sm dark:border-gray-800 dark:bg-gray-900",
            p { class: "text-xs uppercase tracking-wide text-gray-500 dark:text-gray-400", "{label}" }
            p { class: "mt-2 text-2xl font-bold text-gray-900 dark:text-white", "{value}" }
            if let Some(hint) = hint {
                p { class: "mt-1 text-xs text-gray-500", "{hint}" }
            }
        }
    }
}

/// Horizontal bar filled to `percent` (clamped to 0-100).
#[component]
pub fn ProgressBar(
    percent: f64,
    #[props(into, default = "bg-gradient-to-r from-cyan-400 to-violet-600".to_string())]
    fill: String,
) -> Element {
    let width = format!("{:.1}%", percent.clamp(0.0, 100.0));
    rsx! {
        div { class: "h-2 w-full overflow-hidden rounded-full bg-gray-200 dark:bg-gray-800",
            div { class: "h-full rounded-full {fill}", style: "width: {width}" }
        }
    }
}

#[component]
pub fn Badge(#[props(into)] text: String, #[props(into)] class: String) -> Element {
    rsx! {
        span { class: "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {class}", "{text}" }
    }
}

pub fn stars(filled: u8) -> String {
    (0..5u8)
        .map(|idx| if idx < filled { '★' } else { '☆' })
        .collect()
}

/// Grey blocks shown while the dashboard and analytics wait for their figures.
#[component]
pub fn LoadingPlaceholder(#[props(default = 4)] blocks: usize) -> Element {
    rsx! {
        div { class: "grid animate-pulse gap-4 md:grid-cols-2 lg:grid-cols-4",
            for idx in 0..blocks {
                div { key: "{idx}", class: "h-28 rounded-xl bg-gray-200 dark:bg-gray-800" }
            }
        }
    }
}

#[component]
pub fn EmptyState(#[props(into)] message: String) -> Element {
    rsx! {
        p { class: "py-12 text-center text-sm italic text-gray-500", "{message}" }
    }
}

/// Toolbar toggle between two or more layouts.
#[component]
pub fn SegmentButton(
    #[props(into)] label: String,
    active: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let class = if active {
        "bg-gradient-to-r from-cyan-400 to-violet-600 text-white"
    } else {
        "bg-gray-100 text-gray-600 hover:bg-gray-200 dark:bg-gray-800 dark:text-gray-300"
    };
    rsx! {
        button {
            class: "rounded-lg px-3 py-2 text-sm font-medium transition {class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// Select box over a closed set of values plus an "all" entry.
pub fn choice_select<T: Choice>(
    current: Selector<T>,
    all_label: &str,
    on_pick: impl Fn(Selector<T>) + 'static,
) -> Element {
    let selected = current.as_str();
    let options: Vec<(&'static str, &'static str)> = T::all()
        .iter()
        .map(|choice| (choice.as_str(), choice.label()))
        .collect();
    rsx! {
        select {
            class: "rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-700 dark:border-gray-700 dark:bg-gray-900 dark:text-gray-200",
            value: "{selected}",
            onchange: move |evt: FormEvent| match Selector::<T>::parse(&evt.value()) {
                Ok(selector) => on_pick(selector),
                Err(err) => tracing::warn!(%err, "ignored select value"),
            },
            option { value: Selector::<T>::ALL_VALUE, "{all_label}" }
            for (value, label) in options {
                option { key: "{value}", value: "{value}", "{label}" }
            }
        }
    }
}

#[component]
pub fn SearchInput(
    #[props(into)] value: String,
    #[props(into)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            class: "w-full rounded-lg border border-gray-300 bg-white px-4 py-2 text-sm text-gray-900 placeholder-gray-400 focus:border-cyan-400 focus:outline-none dark:border-gray-700 dark:bg-gray-900 dark:text-white",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}
