use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
fn LegalPage(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        main { class: "min-h-screen bg-gray-950 text-white",
            div { class: "container mx-auto px-6 py-24",
                Link { to: Route::Landing {}, class: "mb-8 inline-block text-sm text-cyan-400 hover:underline", "← Retour à l'accueil" }
                h1 { class: "mb-6 text-4xl font-bold", "{title}" }
                p { class: "mb-4 text-gray-300", "Dernière mise à jour: 2024" }
                div { class: "max-w-3xl space-y-4 text-gray-300", {children} }
            }
        }
    }
}

#[component]
pub fn LegalNotice() -> Element {
    rsx! {
        LegalPage { title: "Mentions légales",
            p {
                "Ce site est édité par Globinet. Tous les contenus sont fournis à titre informatif. Pour toute question, contactez-nous à "
                a { href: "mailto:info@globiweb.com", class: "text-cyan-400", "info@globiweb.com" }
                "."
            }
        }
    }
}

#[component]
pub fn PrivacyPolicy() -> Element {
    rsx! {
        LegalPage { title: "Politique de confidentialité",
            p {
                "Nous respectons votre vie privée. Les données soumises via le formulaire de contact sont utilisées uniquement pour répondre à votre demande."
            }
        }
    }
}

#[component]
pub fn TermsOfSale() -> Element {
    rsx! {
        LegalPage { title: "Conditions Générales de Vente (CGV)",
            p {
                "Ces conditions encadrent les prestations fournies par Globinet. Des conditions spécifiques peuvent s’appliquer selon le projet."
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        main { class: "flex min-h-screen items-center justify-center bg-gray-950 px-6 text-center text-white",
            div {
                h1 { class: "bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-9xl font-bold text-transparent", "404" }
                div { class: "mt-8",
                    h2 { class: "mb-4 text-3xl font-bold", "Page non trouvée" }
                    p { class: "mb-8 text-gray-400", "Désolé, la page que vous recherchez n'existe pas ou a été déplacée." }
                    Link {
                        to: Route::Landing {},
                        class: "inline-block rounded-full bg-gradient-to-r from-purple-600 to-pink-600 px-8 py-3 font-semibold text-white transition-transform hover:scale-105",
                        "Retour à l'accueil"
                    }
                }
                div { class: "mt-16 flex justify-center gap-6 text-sm text-gray-500",
                    a { href: "/#portfolio", class: "hover:text-white", "Portfolio" }
                    a { href: "/#about", class: "hover:text-white", "À propos" }
                    a { href: "/#contact", class: "hover:text-white", "Contact" }
                }
            }
        }
    }
}
