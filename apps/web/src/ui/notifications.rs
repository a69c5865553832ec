use crate::state::{use_app_actions, use_app_state};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => (
                "border-emerald-500 bg-emerald-50 dark:bg-emerald-950",
                "text-emerald-700 dark:text-emerald-300",
            ),
            Self::Error => (
                "border-red-500 bg-red-50 dark:bg-red-950",
                "text-red-700 dark:text-red-300",
            ),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    #[props(default)]
    pub details: Vec<(String, String)>,
    #[props(optional)]
    pub on_close: Option<EventHandler<MouseEvent>>,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let (container_class, accent_text) = props.kind.accent_classes();

    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {container_class}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold {accent_text}", "{props.title}" }
                    p { class: "text-xs text-gray-700 dark:text-gray-300", "{props.message}" }
                    if !props.details.is_empty() {
                        ul { class: "mt-2 space-y-1 text-[11px] text-gray-500",
                            for (label, value) in props.details.iter() {
                                li {
                                    span { class: "font-medium", "{label}: " }
                                    span { class: "font-mono break-all", "{value}" }
                                }
                            }
                        }
                    }
                }
                if let Some(handler) = props.on_close {
                    button {
                        class: "rounded bg-gray-200 px-2 py-1 text-[11px] text-gray-600 transition hover:bg-gray-300",
                        onclick: move |evt| handler.call(evt),
                        "Fermer"
                    }
                }
            }
        }
    }
}

/// Operation feedback: refused stage moves, saved settings, relay failures.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let operation = use_app_state().read().operation.clone();

    let toast = if let Some(error) = operation.error {
        let mut details = Vec::new();
        if let Some(status) = operation.last_status {
            details.push(("HTTP".to_string(), status.to_string()));
        }
        let title = operation
            .context
            .unwrap_or_else(|| "Opération échouée".to_string());
        rsx! {
            Toast {
                key: "operation-error",
                kind: ToastKind::Error,
                title,
                message: error,
                details,
                on_close: move |_| actions.clear_operation_status(),
            }
        }
    } else if let Some(message) = operation.last_message {
        let title = operation
            .context
            .unwrap_or_else(|| "Opération réussie".to_string());
        rsx! {
            Toast {
                key: "operation-success",
                kind: ToastKind::Success,
                title,
                message,
                on_close: move |_| actions.clear_operation_status(),
            }
        }
    } else {
        return rsx! {};
    };

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-[60] flex w-80 flex-col gap-3",
            {toast}
        }
    }
}
