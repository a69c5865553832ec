use dioxus::prelude::*;

use crate::fixtures::crm::{recent_activities, MONTHLY_REVENUE_K, MONTH_LABELS};
use crate::hooks::loading::{use_loading_delay, PLACEHOLDER_DELAY_MS};
use crate::models::{Choice, ProjectStatus};
use crate::services::summary::{
    format_percent, priority_projects, relative_widths, ClientSummary, PipelineSummary,
    ProjectSummary, TicketSummary,
};
use crate::state::use_app_state;
use crate::ui::crm::short_date;
use crate::ui::widgets::{LoadingPlaceholder, ProgressBar, StatCard};

const DASHBOARD_MONTHS: usize = 7;
const PRIORITY_PROJECTS: usize = 4;

#[component]
pub fn CrmDashboard() -> Element {
    let loading = use_loading_delay(PLACEHOLDER_DELAY_MS);
    let state = use_app_state();

    if loading() {
        return rsx! {
            div { class: "space-y-6",
                h1 { class: "text-2xl font-bold", "Dashboard" }
                LoadingPlaceholder {}
            }
        };
    }

    let snapshot = state.read();
    let store = &snapshot.crm.store;
    let clients = ClientSummary::compute(&store.clients);
    let pipeline = PipelineSummary::compute(&store.deals);
    let projects = ProjectSummary::compute(&store.projects);
    let tickets = TicketSummary::compute(&store.tickets);

    let revenue = MONTHLY_REVENUE_K[..DASHBOARD_MONTHS]
        .iter()
        .map(|value| u64::from(*value))
        .collect::<Vec<_>>();
    let bars: Vec<(&str, u64, String)> = MONTH_LABELS
        .iter()
        .copied()
        .zip(revenue.iter().copied())
        .zip(relative_widths(&revenue))
        .map(|((month, value), height)| (month, value, format!("{height:.0}%")))
        .collect();

    let upcoming: Vec<(String, String, String, u8, f64)> =
        priority_projects(&store.projects, PRIORITY_PROJECTS)
            .into_iter()
            .map(|project| {
                (
                    project.name.clone(),
                    project.client.clone(),
                    short_date(project.end_date),
                    project.progress.value(),
                    f64::from(project.progress.value()),
                )
            })
            .collect();

    let status_breakdown: Vec<(&str, usize)> = ProjectStatus::all()
        .iter()
        .map(|status| {
            let count = store
                .projects
                .iter()
                .filter(|project| project.status == *status)
                .count();
            (status.label(), count)
        })
        .collect();

    let revenue_label = clients.revenue.to_grouped_label();
    let forecast_label = format!("€{:.0}", pipeline.weighted_forecast);
    let resolution_label = format_percent(tickets.resolution_rate);
    let budget_label = format_percent(projects.budget_utilization);
    drop(snapshot);

    rsx! {
        div { class: "space-y-8",
            header {
                h1 { class: "text-2xl font-bold", "Dashboard" }
                p { class: "text-sm text-gray-500", "Vue d'ensemble de votre activité" }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Revenus", value: revenue_label, hint: format!("{} clients actifs", clients.active) }
                StatCard { label: "Affaires ouvertes", value: pipeline.open_deals().to_string(), hint: format!("Prévision pondérée {forecast_label}") }
                StatCard { label: "Projets actifs", value: projects.active.to_string(), hint: format!("Budget consommé {budget_label}") }
                StatCard { label: "Tickets ouverts", value: tickets.open.to_string(), hint: format!("Taux de résolution {resolution_label}") }
            }
            div { class: "grid gap-6 lg:grid-cols-3",
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900 lg:col-span-2",
                    h2 { class: "mb-6 font-semibold", "Revenus (k€)" }
                    div { class: "flex h-48 items-end gap-3",
                        for (month, value, height) in bars {
                            div { key: "{month}", class: "flex flex-1 flex-col items-center gap-2",
                                span { class: "text-xs text-gray-500", "€{value}k" }
                                div {
                                    class: "w-full rounded-t bg-gradient-to-t from-cyan-400 to-violet-600",
                                    style: "height: {height}",
                                }
                                span { class: "text-xs text-gray-500", "{month}" }
                            }
                        }
                    }
                }
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    h2 { class: "mb-4 font-semibold", "Statut des projets" }
                    ul { class: "space-y-3",
                        for (label, count) in status_breakdown {
                            li { key: "{label}", class: "flex justify-between text-sm",
                                span { class: "text-gray-500", "{label}" }
                                span { class: "font-semibold", "{count}" }
                            }
                        }
                    }
                }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    h2 { class: "mb-4 font-semibold", "Activités récentes" }
                    ul { class: "space-y-4",
                        for (idx, activity) in recent_activities().into_iter().enumerate() {
                            {
                                let dot = activity.kind.dot_class();
                                rsx! {
                                    li { key: "{idx}", class: "flex items-start gap-3",
                                        span { class: "mt-1.5 h-2 w-2 rounded-full {dot}" }
                                        div { class: "flex-1",
                                            p { class: "text-sm font-medium", "{activity.action}" }
                                            p { class: "text-xs text-gray-500", "{activity.description}" }
                                        }
                                        span { class: "text-xs text-gray-400", "{activity.time}" }
                                    }
                                }
                            }
                        }
                    }
                }
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    h2 { class: "mb-4 font-semibold", "Projets prioritaires" }
                    ul { class: "space-y-4",
                        for (name, client, deadline, progress, fill) in upcoming {
                            li { key: "{name}", class: "space-y-2",
                                div { class: "flex justify-between text-sm",
                                    span { class: "font-medium", "{name}" }
                                    span { class: "text-gray-500", "{progress}%" }
                                }
                                ProgressBar { percent: fill }
                                p { class: "text-xs text-gray-500", "{client} · échéance {deadline}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
