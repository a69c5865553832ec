//! Public marketing site.

pub mod contact;
pub mod legal;
pub mod sections;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::fixtures::site::NAV_SECTIONS;
use crate::hooks::effects::{use_color_scheme, use_landing_effects};
use crate::hooks::loading::use_landing_counter;
use crate::state::{use_app_actions, use_app_state};
use crate::Route;

use contact::{ContactSection, Footer};
use sections::{AboutSection, HeroSection, PortfolioSection, ProcessSection};

#[component]
pub fn Landing() -> Element {
    use_landing_counter();
    use_landing_effects();
    use_color_scheme();

    let progress = use_app_state().read().landing.loading_progress;
    if progress < 100 {
        return rsx! { LoadingScreen { progress } };
    }

    rsx! {
        div { class: "min-h-screen scroll-smooth bg-gray-950 text-white",
            Navigation {}
            main {
                HeroSection {}
                AboutSection {}
                PortfolioSection {}
                ProcessSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}

#[component]
fn LoadingScreen(progress: u8) -> Element {
    rsx! {
        div { class: "fixed inset-0 z-[100] flex items-center justify-center bg-gray-950",
            div { class: "flex flex-col items-center",
                h1 { class: "mb-8 bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 bg-clip-text text-4xl font-bold text-transparent",
                    "GLOBINET"
                }
                div { class: "h-1 w-64 overflow-hidden rounded-full bg-gray-800",
                    div {
                        class: "h-full bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 transition-all",
                        style: "width: {progress}%",
                    }
                }
                p { class: "mt-4 text-sm text-gray-400", "{progress}%" }
            }
        }
    }
}

#[component]
fn Navigation() -> Element {
    let actions = use_app_actions();
    let nav_open = use_app_state().read().landing.nav_open;

    rsx! {
        nav { class: "fixed inset-x-0 top-0 z-40 border-b border-white/5 bg-gray-950/80 backdrop-blur",
            div { class: "container mx-auto flex items-center justify-between px-6 py-4",
                a { href: "#hero", class: "flex items-center gap-2 text-xl font-bold",
                    span { class: "bg-gradient-to-r from-cyan-400 to-violet-500 bg-clip-text text-transparent", "GLOBI" }
                    span { "NET" }
                }
                div { class: "hidden items-center gap-8 lg:flex",
                    for (label, anchor) in NAV_SECTIONS {
                        a {
                            key: "{anchor}",
                            href: "#{anchor}",
                            class: "text-sm text-gray-300 transition hover:text-cyan-400",
                            "{label}"
                        }
                    }
                    Link {
                        to: Route::CrmDashboard {},
                        class: "text-sm text-gray-400 transition hover:text-violet-400",
                        "CRM"
                    }
                    a {
                        href: "#contact",
                        class: "rounded-full bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 px-6 py-2.5 text-sm font-semibold text-gray-950",
                        "Démarrer un projet"
                    }
                }
                button {
                    class: "flex h-10 w-10 items-center justify-center lg:hidden",
                    aria_label: "Menu",
                    onclick: move |_| actions.set_nav_open(!nav_open),
                    if nav_open { "✕" } else { "☰" }
                }
            }
            if nav_open {
                div { class: "fixed inset-0 top-16 z-30 flex flex-col items-center justify-center gap-8 bg-gray-950 lg:hidden",
                    for (label, anchor) in NAV_SECTIONS {
                        a {
                            key: "{anchor}",
                            href: "#{anchor}",
                            class: "text-2xl font-medium text-white transition hover:text-cyan-400",
                            onclick: move |_| actions.set_nav_open(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
