use dioxus::prelude::*;

use crate::fixtures::site::{portfolio_items, process_steps, ABOUT_KEYWORDS, HERO_STATS, SERVICES};
use crate::models::PortfolioItem;
use crate::state::{portfolio_categories, use_app_actions, use_app_state};
use crate::ui::widgets::Modal;

const SECTION_TITLE: &str = "text-4xl font-bold md:text-6xl";
const GRADIENT_TEXT: &str =
    "bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 bg-clip-text text-transparent";

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "hero", class: "relative flex min-h-screen items-center overflow-hidden pt-24",
            div { id: "hero-backdrop", class: "absolute inset-0 -z-0" }
            div { class: "container relative mx-auto px-6 text-center",
                p { class: "mb-6 text-sm uppercase tracking-[0.3em] text-cyan-400", "Créateurs d'expériences digitales" }
                h1 { class: "mb-8 text-6xl font-bold md:text-8xl",
                    span { class: GRADIENT_TEXT, "GLOBINET" }
                }
                p { class: "mx-auto mb-12 max-w-2xl text-lg text-gray-300 md:text-xl",
                    "Nous transformons vos idées en expériences digitales "
                    span { class: "text-cyan-400", "immersives" }
                    " et "
                    span { class: "text-pink-500", "innovantes" }
                }
                div { class: "flex flex-col items-center justify-center gap-4 sm:flex-row",
                    a {
                        href: "#about",
                        class: "rounded-full bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 px-8 py-4 font-semibold text-gray-950",
                        "Découvrir notre univers →"
                    }
                    a {
                        href: "#portfolio",
                        class: "rounded-full border border-white/20 px-8 py-4 font-semibold text-white transition hover:border-cyan-400",
                        "Voir nos réalisations"
                    }
                }
                div { class: "mx-auto mt-20 grid max-w-3xl grid-cols-3 gap-8",
                    for (value, label) in HERO_STATS {
                        div { key: "{label}", "data-reveal": "true", class: "reveal",
                            p { class: "text-3xl font-bold {GRADIENT_TEXT}", "{value}" }
                            p { class: "mt-1 text-sm text-gray-400", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "relative py-32",
            div { class: "container mx-auto px-6",
                div { class: "mb-16 text-center", "data-reveal": "true",
                    h2 { class: SECTION_TITLE,
                        "Redéfinir "
                        span { class: GRADIENT_TEXT, "le digital" }
                    }
                    p { class: "mx-auto mt-6 max-w-3xl text-lg text-gray-400",
                        "Nous sommes une agence digitale nouvelle génération, spécialisée dans la création d'expériences web immersives et innovantes qui propulsent votre marque vers de nouveaux sommets."
                    }
                }
                div { class: "mb-20 flex flex-wrap justify-center gap-6",
                    for (word, color) in ABOUT_KEYWORDS {
                        span {
                            key: "{word}",
                            class: "rounded-full border px-6 py-2 text-lg font-semibold",
                            style: "color: {color}; border-color: {color}55",
                            "{word}"
                        }
                    }
                }
                div { class: "grid gap-8 md:grid-cols-2 lg:grid-cols-4",
                    for (icon, title, description, features) in SERVICES {
                        div {
                            key: "{title}",
                            "data-reveal": "true",
                            class: "rounded-3xl border border-white/10 bg-white/5 p-8 transition hover:border-cyan-400/50",
                            div { class: "mb-4 text-4xl", "{icon}" }
                            h3 { class: "mb-3 text-xl font-bold text-white", "{title}" }
                            p { class: "mb-6 text-sm text-gray-400", "{description}" }
                            ul { class: "space-y-2",
                                for feature in features {
                                    li { key: "{feature}", class: "text-sm text-gray-300", "▹ {feature}" }
                                }
                            }
                        }
                    }
                }
                div { class: "mt-20 text-center",
                    p { class: "mb-6 text-2xl text-gray-300", "Prêt à transformer votre vision en réalité digitale ?" }
                    a {
                        href: "#contact",
                        class: "inline-block rounded-full bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 px-8 py-4 font-semibold text-gray-950",
                        "Discutons de votre projet"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PortfolioSection() -> Element {
    let actions = use_app_actions();
    let landing = use_app_state().read().landing.clone();

    let categories = portfolio_categories(&portfolio_items());
    let visible = landing.visible_portfolio();
    let selected = landing
        .selected_project
        .and_then(|id| portfolio_items().into_iter().find(|item| item.id == id));
    let all_active = landing.portfolio_category.is_none();

    rsx! {
        section { id: "portfolio", class: "relative py-32",
            div { class: "container mx-auto px-6",
                div { class: "mb-12 text-center", "data-reveal": "true",
                    h2 { class: SECTION_TITLE,
                        "Nos "
                        span { class: GRADIENT_TEXT, "réalisations" }
                    }
                }
                div { class: "mb-12 flex flex-wrap justify-center gap-3",
                    {category_button("Tous", all_active, move |_| actions.set_portfolio_category(None))}
                    for category in categories {
                        {
                            let active = landing.portfolio_category.as_deref() == Some(category.as_str());
                            let picked = category.clone();
                            category_button(
                                &category,
                                active,
                                move |_| actions.set_portfolio_category(Some(picked.clone())),
                            )
                        }
                    }
                }
                div { class: "grid gap-8 md:grid-cols-2 lg:grid-cols-3",
                    for item in visible {
                        {portfolio_card(item, move |id| actions.select_portfolio_item(Some(id)))}
                    }
                }
            }
            if let Some(item) = selected {
                Modal {
                    title: item.title.clone(),
                    on_close: move |_| actions.select_portfolio_item(None),
                    {portfolio_detail(&item)}
                }
            }
        }
    }
}

fn category_button(label: &str, active: bool, onclick: impl FnMut(MouseEvent) + 'static) -> Element {
    let class = if active {
        "bg-gradient-to-r from-cyan-400 to-violet-500 text-gray-950"
    } else {
        "border border-white/20 text-gray-300 hover:border-cyan-400"
    };
    rsx! {
        button {
            key: "{label}",
            class: "rounded-full px-5 py-2 text-sm font-medium transition {class}",
            onclick: onclick,
            "{label}"
        }
    }
}

fn portfolio_card(item: PortfolioItem, on_open: impl Fn(u32) + 'static) -> Element {
    let id = item.id;
    rsx! {
        button {
            key: "{id}",
            "data-reveal": "true",
            class: "group overflow-hidden rounded-3xl border border-white/10 bg-white/5 text-left transition hover:-translate-y-1",
            onclick: move |_| on_open(id),
            div { class: "h-56 overflow-hidden",
                img {
                    class: "h-full w-full object-cover transition duration-500 group-hover:scale-110",
                    src: "{item.image}",
                    alt: "{item.title}",
                }
            }
            div { class: "p-6",
                p { class: "text-xs uppercase tracking-wider", style: "color: {item.color}", "{item.category}" }
                h3 { class: "mt-2 text-xl font-bold text-white", "{item.title}" }
                p { class: "mt-2 text-sm text-gray-400", "{item.description}" }
            }
        }
    }
}

fn portfolio_detail(item: &PortfolioItem) -> Element {
    rsx! {
        div { class: "space-y-4",
            img { class: "h-64 w-full rounded-xl object-cover", src: "{item.image}", alt: "{item.title}" }
            p { class: "text-xs uppercase tracking-wider", style: "color: {item.color}", "{item.category}" }
            p { class: "text-gray-600 dark:text-gray-300", "{item.description}" }
            div { class: "flex flex-wrap gap-2",
                for tech in item.tech.iter() {
                    span {
                        key: "{tech}",
                        class: "rounded-full bg-gray-100 px-3 py-1 text-xs text-gray-700 dark:bg-gray-800 dark:text-gray-300",
                        "{tech}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProcessSection() -> Element {
    let steps = process_steps();

    rsx! {
        section { id: "process", class: "relative py-32",
            div { class: "container mx-auto px-6",
                div { class: "mb-20 text-center", "data-reveal": "true",
                    h2 { class: SECTION_TITLE,
                        "Notre "
                        span { class: GRADIENT_TEXT, "Process" }
                    }
                }
                ol { class: "relative space-y-12 border-l border-white/10 pl-10",
                    for (idx, step) in steps.into_iter().enumerate() {
                        {
                            let number = format!("{:02}", idx + 1);
                            rsx! {
                                li { key: "{number}", "data-reveal": "true", class: "relative",
                                    span { class: "absolute -left-[3.6rem] flex h-10 w-10 items-center justify-center rounded-full bg-gray-900 text-xl",
                                        "{step.icon}"
                                    }
                                    p { class: "text-xs uppercase tracking-widest text-cyan-400", "{number} · {step.phase} · {step.duration}" }
                                    h3 { class: "mt-2 text-2xl font-bold text-white", "{step.title}" }
                                    p { class: "mt-2 max-w-2xl text-gray-400", "{step.description}" }
                                    ul { class: "mt-4 flex flex-wrap gap-2",
                                        for detail in step.details.iter() {
                                            li { key: "{detail}", class: "rounded-full border border-white/10 px-3 py-1 text-xs text-gray-300", "{detail}" }
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
