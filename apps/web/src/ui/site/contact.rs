use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::models::Choice;
use crate::services::contact::{BudgetBracket, ContactField, ContactForm, SubmissionPhase};
use crate::state::{use_app_actions, use_app_state, AppActions};
use crate::Route;

const INPUT_CLASS: &str = "w-full rounded-xl border border-white/10 bg-white/5 px-4 py-3 text-white placeholder-gray-500 focus:border-cyan-400 focus:outline-none";

const OPENING_HOURS: [(&str, &str); 3] = [
    ("Lun - Ven", "9h00 - 18h00"),
    ("Samedi", "10h00 - 16h00"),
    ("Dimanche", "Fermé"),
];

const SOCIALS: [&str; 4] = ["Twitter", "LinkedIn", "Instagram", "Dribbble"];

#[component]
pub fn ContactSection() -> Element {
    let actions = use_app_actions();
    let form = use_app_state().read().contact.clone();

    let sending = form.is_submitting();
    let submit_label = if sending {
        "Envoi en cours..."
    } else {
        "Envoyer le message"
    };

    rsx! {
        section { id: "contact", class: "relative py-32",
            div { class: "container mx-auto px-6",
                div { class: "mb-16 text-center", "data-reveal": "true",
                    h2 { class: "text-4xl font-bold md:text-6xl",
                        "Créons ensemble "
                        span { class: "bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 bg-clip-text text-transparent",
                            "l'extraordinaire"
                        }
                    }
                    p { class: "mx-auto mt-6 max-w-2xl text-lg text-gray-400",
                        "Transformons vos idées en réalité digitale. Partagez votre vision et commençons cette aventure créative"
                    }
                }
                div { class: "grid gap-12 lg:grid-cols-2",
                    form {
                        class: "space-y-6 rounded-3xl border border-white/10 bg-white/5 p-8",
                        novalidate: true,
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            actions.submit_contact();
                        },
                        div { class: "grid gap-6 md:grid-cols-2",
                            {text_field(&form, ContactField::Name, "text", "Jean Dupont", actions)}
                            {text_field(&form, ContactField::Email, "email", "jean@exemple.ch", actions)}
                        }
                        div { class: "grid gap-6 md:grid-cols-2",
                            {text_field(&form, ContactField::Company, "text", "Votre entreprise", actions)}
                            {text_field(&form, ContactField::Project, "text", "Site web, application...", actions)}
                        }
                        {budget_field(&form, actions)}
                        {message_field(&form, actions)}
                        {phase_banner(&form.phase, actions)}
                        button {
                            r#type: "submit",
                            disabled: sending,
                            class: "w-full rounded-full bg-gradient-to-r from-cyan-400 via-violet-500 to-pink-500 px-8 py-4 font-semibold text-gray-950 transition disabled:cursor-not-allowed disabled:opacity-60",
                            "{submit_label}"
                        }
                    }
                    {contact_details()}
                }
            }
        }
    }
}

fn field_error(form: &ContactForm, field: ContactField) -> Option<String> {
    form.error_for(field).map(|err| err.to_string())
}

fn text_field(
    form: &ContactForm,
    field: ContactField,
    input_type: &'static str,
    placeholder: &'static str,
    actions: AppActions,
) -> Element {
    let name = field.name();
    let label = field.label();
    let value = form.draft.get(field).to_string();
    let error = field_error(form, field);
    let disabled = form.is_submitting();

    rsx! {
        label { class: "block space-y-2",
            span { class: "text-sm text-gray-400", "{label}" }
            input {
                class: INPUT_CLASS,
                name: "{name}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt: FormEvent| actions.set_contact_field(field, evt.value()),
            }
            if let Some(error) = error {
                span { class: "text-xs text-red-400", "{error}" }
            }
        }
    }
}

fn budget_field(form: &ContactForm, actions: AppActions) -> Element {
    let label = ContactField::Budget.label();
    let selected = form.draft.budget.clone();
    let error = field_error(form, ContactField::Budget);
    let options: Vec<(&'static str, &'static str)> = BudgetBracket::all()
        .iter()
        .map(|bracket| (bracket.as_str(), bracket.label()))
        .collect();

    rsx! {
        label { class: "block space-y-2",
            span { class: "text-sm text-gray-400", "{label}" }
            select {
                class: INPUT_CLASS,
                name: "budget",
                value: "{selected}",
                disabled: form.is_submitting(),
                onchange: move |evt: FormEvent| actions.set_contact_field(ContactField::Budget, evt.value()),
                option { value: "", "Sélectionner un budget" }
                for (value, text) in options {
                    option { key: "{value}", value: "{value}", "{text}" }
                }
            }
            if let Some(error) = error {
                span { class: "text-xs text-red-400", "{error}" }
            }
        }
    }
}

fn message_field(form: &ContactForm, actions: AppActions) -> Element {
    let label = ContactField::Message.label();
    let value = form.draft.message.clone();
    let error = field_error(form, ContactField::Message);

    rsx! {
        label { class: "block space-y-2",
            span { class: "text-sm text-gray-400", "{label}" }
            textarea {
                class: "{INPUT_CLASS} min-h-40",
                name: "message",
                rows: 5,
                placeholder: "Parlez-nous de votre projet",
                value: "{value}",
                disabled: form.is_submitting(),
                oninput: move |evt: FormEvent| actions.set_contact_field(ContactField::Message, evt.value()),
            }
            if let Some(error) = error {
                span { class: "text-xs text-red-400", "{error}" }
            }
        }
    }
}

fn phase_banner(phase: &SubmissionPhase, actions: AppActions) -> Element {
    match phase {
        SubmissionPhase::Editing | SubmissionPhase::Submitting => rsx! {},
        SubmissionPhase::Sent => rsx! {
            div { class: "rounded-xl border border-emerald-400/40 bg-emerald-400/10 p-4 text-sm text-emerald-300",
                role: "status",
                "✓ Message envoyé ! Nous revenons vers vous très vite."
            }
        },
        SubmissionPhase::Failed(message) => rsx! {
            div { class: "flex items-start justify-between gap-4 rounded-xl border border-red-400/40 bg-red-400/10 p-4 text-sm text-red-300",
                role: "alert",
                span { "{message}" }
                button {
                    r#type: "button",
                    class: "text-xs underline",
                    onclick: move |_| actions.dismiss_contact_failure(),
                    "Fermer"
                }
            }
        },
    }
}

fn contact_details() -> Element {
    rsx! {
        div { class: "space-y-8",
            div { class: "rounded-3xl border border-white/10 bg-white/5 p-8",
                h3 { class: "mb-6 text-2xl font-bold text-white", "Contact Direct" }
                div { class: "space-y-4 text-sm",
                    a { href: "mailto:info@globinet.com", class: "block",
                        p { class: "text-gray-400", "Email" }
                        p { class: "text-white hover:text-cyan-400", "info@globinet.com" }
                    }
                    a { href: "tel:+41215050062", class: "block",
                        p { class: "text-gray-400", "Téléphone" }
                        p { class: "text-white hover:text-violet-400", "+41 21 505 00 62" }
                    }
                    div {
                        p { class: "text-gray-400", "Adresse" }
                        p { class: "text-white", "Rue du Collège 18" }
                        p { class: "text-white", "1260 Nyon, Suisse" }
                    }
                }
            }
            div { class: "rounded-3xl border border-white/10 bg-white/5 p-8",
                h3 { class: "mb-6 text-2xl font-bold text-white", "Horaires" }
                dl { class: "space-y-2 text-sm",
                    for (day, hours) in OPENING_HOURS {
                        div { key: "{day}", class: "flex justify-between",
                            dt { class: "text-gray-400", "{day}" }
                            dd { class: "text-white", "{hours}" }
                        }
                    }
                }
                p { class: "mt-6 flex items-center gap-2 text-sm text-emerald-400",
                    span { class: "h-2 w-2 animate-pulse rounded-full bg-emerald-400" }
                    "Actuellement disponible"
                }
            }
            div { class: "rounded-3xl border border-white/10 bg-white/5 p-8",
                h3 { class: "mb-6 text-2xl font-bold text-white", "Suivez-nous" }
                div { class: "grid grid-cols-4 gap-4",
                    for social in SOCIALS {
                        a {
                            key: "{social}",
                            href: "#",
                            title: "{social}",
                            class: "flex h-16 w-16 items-center justify-center rounded-xl border border-white/10 text-xs text-gray-300 transition hover:bg-white/10",
                            "{social}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "border-t border-white/10 py-8",
            div { class: "container mx-auto flex flex-col items-center justify-between gap-4 px-6 md:flex-row",
                p { class: "text-sm text-gray-400", "© 2024 Globinet. Tous droits réservés." }
                div { class: "flex gap-6 text-sm text-gray-400",
                    Link { to: Route::LegalNotice {}, class: "hover:text-cyan-400", "Mentions légales" }
                    Link { to: Route::PrivacyPolicy {}, class: "hover:text-cyan-400", "Politique de confidentialité" }
                    Link { to: Route::TermsOfSale {}, class: "hover:text-cyan-400", "CGV" }
                }
            }
        }
    }
}
