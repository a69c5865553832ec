use dioxus::prelude::*;

use crate::effects::system_prefers_dark;
use crate::fixtures::site::team_members;
use crate::state::{
    use_app_actions, use_app_state, AppActions, NotificationChannel, ProfileSettings,
    SettingsState, SettingsTab, ThemePreference,
};

const INPUT_CLASS: &str = "w-full rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm dark:border-gray-700 dark:bg-gray-900";

#[component]
pub fn Settings() -> Element {
    let actions = use_app_actions();
    let settings = use_app_state().read().settings.clone();

    let body = match settings.tab {
        SettingsTab::Profile => profile_tab(&settings.profile, actions),
        SettingsTab::Notifications => notifications_tab(&settings, actions),
        SettingsTab::Security => security_tab(settings.two_factor, actions),
        SettingsTab::Appearance => appearance_tab(settings.theme, actions),
        SettingsTab::Team => team_tab(),
    };
    let save_class = if settings.dirty {
        "bg-gradient-to-r from-cyan-400 to-violet-600 text-white"
    } else {
        "cursor-not-allowed bg-gray-200 text-gray-500 dark:bg-gray-800"
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold", "Paramètres" }
                    p { class: "text-sm text-gray-500", "Gérez votre compte et vos préférences" }
                }
                button {
                    class: "rounded-lg px-4 py-2 text-sm font-medium {save_class}",
                    disabled: !settings.dirty,
                    onclick: move |_| actions.save_settings(),
                    "Enregistrer"
                }
            }
            div { class: "flex flex-col gap-6 lg:flex-row",
                nav { class: "flex gap-1 overflow-x-auto lg:w-56 lg:flex-col",
                    for tab in SettingsTab::ALL {
                        {
                            let label = tab.label();
                            let class = if tab == settings.tab {
                                "bg-gradient-to-r from-cyan-400/20 to-violet-600/20 text-cyan-600 dark:text-cyan-400"
                            } else {
                                "text-gray-600 hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-800"
                            };
                            rsx! {
                                button {
                                    key: "{label}",
                                    class: "rounded-lg px-4 py-2 text-left text-sm font-medium {class}",
                                    onclick: move |_| actions.set_settings_tab(tab),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
                section { class: "flex-1 rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    {body}
                }
            }
        }
    }
}

fn profile_input(
    label: &'static str,
    value: String,
    actions: AppActions,
    apply: fn(&mut ProfileSettings, String),
) -> Element {
    rsx! {
        label { class: "block space-y-1",
            span { class: "text-xs uppercase text-gray-500", "{label}" }
            input {
                class: INPUT_CLASS,
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    let value = evt.value();
                    actions.update_settings(|settings| apply(&mut settings.profile, value));
                },
            }
        }
    }
}

fn profile_tab(profile: &ProfileSettings, actions: AppActions) -> Element {
    rsx! {
        div { class: "grid gap-4 md:grid-cols-2",
            {profile_input("Nom", profile.name.clone(), actions, |p, v| p.name = v)}
            {profile_input("Email", profile.email.clone(), actions, |p, v| p.email = v)}
            {profile_input("Téléphone", profile.phone.clone(), actions, |p, v| p.phone = v)}
            {profile_input("Entreprise", profile.company.clone(), actions, |p, v| p.company = v)}
            {profile_input("Rôle", profile.role.clone(), actions, |p, v| p.role = v)}
        }
    }
}

fn toggle_row(label: &str, enabled: bool, on_toggle: impl FnMut(MouseEvent) + 'static) -> Element {
    let track = if enabled {
        "bg-gradient-to-r from-cyan-400 to-violet-600"
    } else {
        "bg-gray-300 dark:bg-gray-700"
    };
    let knob = if enabled { "translate-x-5" } else { "translate-x-0" };
    rsx! {
        div { key: "{label}", class: "flex items-center justify-between py-3",
            span { class: "text-sm", "{label}" }
            button {
                role: "switch",
                aria_checked: "{enabled}",
                class: "relative h-6 w-11 rounded-full transition {track}",
                onclick: on_toggle,
                span { class: "absolute left-0.5 top-0.5 h-5 w-5 rounded-full bg-white transition {knob}" }
            }
        }
    }
}

fn notifications_tab(settings: &SettingsState, actions: AppActions) -> Element {
    let rows: Vec<(NotificationChannel, bool)> = NotificationChannel::ALL
        .iter()
        .map(|channel| (*channel, settings.notifications.is_enabled(*channel)))
        .collect();

    rsx! {
        div { class: "divide-y divide-gray-100 dark:divide-gray-800",
            for (channel, enabled) in rows {
                {toggle_row(channel.label(), enabled, move |_| {
                    actions.update_settings(|settings| settings.notifications.toggle(channel))
                })}
            }
        }
    }
}

fn security_tab(two_factor: bool, actions: AppActions) -> Element {
    rsx! {
        div { class: "space-y-6",
            {toggle_row("Authentification à deux facteurs", two_factor, move |_| {
                actions.update_settings(|settings| settings.two_factor = !settings.two_factor)
            })}
            div { class: "space-y-3",
                h3 { class: "font-semibold", "Changer le mot de passe" }
                input { class: INPUT_CLASS, r#type: "password", placeholder: "Mot de passe actuel" }
                input { class: INPUT_CLASS, r#type: "password", placeholder: "Nouveau mot de passe" }
            }
        }
    }
}

fn appearance_tab(theme: ThemePreference, actions: AppActions) -> Element {
    let themes = [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System];

    rsx! {
        div { class: "space-y-3",
            h3 { class: "font-semibold", "Thème" }
            div { class: "grid gap-3 sm:grid-cols-3",
                for choice in themes {
                    {
                        let label = choice.label();
                        let class = if choice == theme {
                            "border-cyan-400 ring-2 ring-cyan-400/40"
                        } else {
                            "border-gray-200 dark:border-gray-700"
                        };
                        rsx! {
                            button {
                                key: "{label}",
                                class: "rounded-xl border p-4 text-sm font-medium {class}",
                                onclick: move |_| actions.set_theme(choice, system_prefers_dark()),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn team_tab() -> Element {
    rsx! {
        ul { class: "divide-y divide-gray-100 dark:divide-gray-800",
            for member in team_members() {
                {
                    let initials = member.initials();
                    rsx! {
                        li { key: "{member.email}", class: "flex items-center gap-3 py-3",
                            div { class: "flex h-10 w-10 items-center justify-center rounded-full bg-gradient-to-br from-cyan-400 to-violet-600 text-sm font-bold text-white",
                                "{initials}"
                            }
                            div { class: "flex-1",
                                p { class: "text-sm font-medium", "{member.name}" }
                                p { class: "text-xs text-gray-500", "{member.email}" }
                            }
                            span { class: "rounded-full bg-gray-100 px-2 py-0.5 text-xs dark:bg-gray-800", "{member.role}" }
                        }
                    }
                }
            }
        }
    }
}
