//! Demo CRM: layout shell and one screen per route.

pub mod analytics;
pub mod clients;
pub mod dashboard;
pub mod pipeline;
pub mod projects;
pub mod settings;
pub mod tickets;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::fixtures::crm::MONTH_LABELS;
use crate::hooks::effects::use_color_scheme;
use crate::hooks::shortcuts::use_shell_shortcuts;
use crate::services::filter::{search_everything, SearchHit, SearchHitKind};
use crate::state::{use_app_actions, use_app_state, AppActions, Selection};
use crate::Route;

const SEARCH_HITS_PER_KIND: usize = 3;

struct MenuEntry {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

fn menu() -> [MenuEntry; 7] {
    [
        MenuEntry { label: "Dashboard", icon: "▦", route: Route::CrmDashboard {} },
        MenuEntry { label: "Clients", icon: "👥", route: Route::Clients {} },
        MenuEntry { label: "Pipeline", icon: "⇶", route: Route::Pipeline {} },
        MenuEntry { label: "Projets", icon: "📁", route: Route::Projects {} },
        MenuEntry { label: "Tickets", icon: "🎫", route: Route::Tickets {} },
        MenuEntry { label: "Analytics", icon: "📈", route: Route::Analytics {} },
        MenuEntry { label: "Paramètres", icon: "⚙", route: Route::Settings {} },
    ]
}

#[component]
pub fn CrmLayout() -> Element {
    use_shell_shortcuts();
    use_color_scheme();

    let actions = use_app_actions();
    let shell = use_app_state().read().shell.clone();
    let current: Route = use_route();

    let sidebar_width = if shell.sidebar_open { "w-64" } else { "w-20" };
    let content_offset = if shell.sidebar_open { "lg:ml-64" } else { "lg:ml-20" };
    let theme_icon = if shell.dark_mode { "☀" } else { "☾" };

    rsx! {
        div { class: "min-h-screen bg-gray-50 text-gray-900 transition-colors dark:bg-gray-950 dark:text-gray-100",
            aside { class: "fixed inset-y-0 left-0 z-30 hidden flex-col border-r border-gray-200 bg-white transition-all dark:border-gray-800 dark:bg-gray-900 lg:flex {sidebar_width}",
                div { class: "flex h-16 items-center justify-between px-4",
                    if shell.sidebar_open {
                        Link { to: Route::Landing {}, class: "text-xl font-bold",
                            span { class: "bg-gradient-to-r from-cyan-400 to-violet-600 bg-clip-text text-transparent", "GLOBINET" }
                            span { class: "ml-1 text-xs text-gray-500", "CRM" }
                        }
                    }
                    button {
                        class: "rounded-lg p-2 text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-800",
                        aria_label: "Réduire le menu",
                        onclick: move |_| actions.toggle_sidebar(),
                        if shell.sidebar_open { "«" } else { "»" }
                    }
                }
                {menu_links(&current, shell.sidebar_open, actions)}
            }

            if shell.mobile_menu_open {
                div {
                    class: "fixed inset-0 z-40 bg-black/50 lg:hidden",
                    onclick: move |_| actions.set_mobile_menu(false),
                    aside {
                        class: "h-full w-64 bg-white p-4 dark:bg-gray-900",
                        onclick: move |evt| evt.stop_propagation(),
                        {menu_links(&current, true, actions)}
                    }
                }
            }

            div { class: "transition-all {content_offset}",
                header { class: "sticky top-0 z-20 flex h-16 items-center gap-4 border-b border-gray-200 bg-white/80 px-4 backdrop-blur dark:border-gray-800 dark:bg-gray-900/80",
                    button {
                        class: "rounded-lg p-2 lg:hidden",
                        aria_label: "Menu",
                        onclick: move |_| actions.set_mobile_menu(true),
                        "☰"
                    }
                    button {
                        class: "flex flex-1 items-center gap-2 rounded-lg border border-gray-200 px-4 py-2 text-left text-sm text-gray-400 dark:border-gray-700",
                        onclick: move |_| actions.open_search(),
                        span { "🔍 Rechercher des clients, projets, tickets..." }
                        kbd { class: "ml-auto hidden rounded border border-gray-300 px-1.5 text-[10px] dark:border-gray-600 md:inline", "⌘K" }
                    }
                    button {
                        class: "rounded-lg p-2 text-lg hover:bg-gray-100 dark:hover:bg-gray-800",
                        aria_label: "Changer de thème",
                        onclick: move |_| actions.set_dark_mode(!shell.dark_mode),
                        "{theme_icon}"
                    }
                    div { class: "flex h-9 w-9 items-center justify-center rounded-full bg-gradient-to-br from-cyan-400 to-violet-600 text-sm font-bold text-white",
                        "AU"
                    }
                }
                main { class: "p-4 md:p-8", Outlet::<Route> {} }
            }

            if shell.search_open {
                SearchModal { query: shell.search_query.clone() }
            }
        }
    }
}

fn menu_links(current: &Route, expanded: bool, actions: AppActions) -> Element {
    rsx! {
        nav { class: "flex-1 space-y-1 px-3 py-4",
            for entry in menu() {
                {
                    let active = &entry.route == current;
                    let class = if active {
                        "bg-gradient-to-r from-cyan-400/20 to-violet-600/20 text-cyan-600 dark:text-cyan-400"
                    } else {
                        "text-gray-600 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                    };
                    rsx! {
                        Link {
                            key: "{entry.label}",
                            to: entry.route.clone(),
                            class: "flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium transition {class}",
                            onclick: move |_| actions.set_mobile_menu(false),
                            span { class: "w-5 text-center", "{entry.icon}" }
                            if expanded {
                                span { "{entry.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchModal(query: String) -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let navigator = use_navigator();

    let hits = search_everything(&state.read().crm.store, &query, SEARCH_HITS_PER_KIND);
    let blank = query.trim().is_empty();

    let open_hit = move |hit: SearchHit| {
        let (selection, route) = match hit.kind {
            SearchHitKind::Client => (Selection::Client(hit.id), Route::Clients {}),
            SearchHitKind::Deal => (Selection::Deal(hit.id), Route::Pipeline {}),
            SearchHitKind::Project => (Selection::Project(hit.id), Route::Projects {}),
            SearchHitKind::Ticket => (Selection::Ticket(hit.id), Route::Tickets {}),
        };
        actions.dismiss_overlays();
        actions.select(Some(selection));
        navigator.push(route);
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-start justify-center bg-black/50 p-4 pt-24 backdrop-blur-sm",
            onclick: move |_| actions.dismiss_overlays(),
            div {
                class: "w-full max-w-2xl overflow-hidden rounded-2xl bg-white shadow-2xl dark:bg-gray-900",
                onclick: move |evt| evt.stop_propagation(),
                input {
                    class: "w-full border-b border-gray-200 bg-transparent px-6 py-4 text-lg focus:outline-none dark:border-gray-800",
                    autofocus: true,
                    placeholder: "Rechercher des clients, projets, tickets...",
                    value: "{query}",
                    oninput: move |evt: FormEvent| actions.set_search_query(evt.value()),
                }
                div { class: "max-h-96 overflow-y-auto p-2",
                    if blank {
                        p { class: "px-4 py-6 text-center text-sm text-gray-500", "Tapez pour rechercher · Échap pour fermer" }
                    } else if hits.is_empty() {
                        p { class: "px-4 py-6 text-center text-sm text-gray-500", "Aucun résultat" }
                    } else {
                        for hit in hits {
                            {
                                let kind = hit.kind.label();
                                let key = format!("{}-{}", kind, hit.id);
                                let title = hit.title.clone();
                                let subtitle = hit.subtitle.clone();
                                rsx! {
                                    button {
                                        key: "{key}",
                                        class: "flex w-full items-center gap-3 rounded-lg px-4 py-3 text-left hover:bg-gray-100 dark:hover:bg-gray-800",
                                        onclick: move |_| open_hit(hit.clone()),
                                        span { class: "rounded bg-gray-100 px-2 py-0.5 text-[10px] uppercase text-gray-500 dark:bg-gray-800", "{kind}" }
                                        span { class: "flex-1",
                                            span { class: "block text-sm font-medium", "{title}" }
                                            span { class: "block text-xs text-gray-500", "{subtitle}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// `15 Jan 2024` style label.
pub(crate) fn short_date(date: time::Date) -> String {
    let month = MONTH_LABELS[usize::from(u8::from(date.month())) - 1];
    format!("{} {} {}", date.day(), month, date.year())
}

pub(crate) fn short_datetime(moment: time::PrimitiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        short_date(moment.date()),
        moment.hour(),
        moment.minute()
    )
}
