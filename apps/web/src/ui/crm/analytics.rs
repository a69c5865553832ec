use dioxus::prelude::*;

use crate::fixtures::crm::{MONTHLY_REVENUE_K, MONTH_LABELS};
use crate::hooks::loading::{use_loading_delay, PLACEHOLDER_DELAY_MS};
use crate::models::{Choice, DealStage, Money};
use crate::services::summary::{
    format_percent, percentage, relative_widths, ClientSummary, PipelineSummary, ProjectSummary,
    TicketSummary,
};
use crate::state::use_app_state;
use crate::ui::widgets::{LoadingPlaceholder, ProgressBar, StatCard};

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// Trailing slice of the monthly revenue series shown in the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnalyticsPeriod {
    HalfYear,
    Quarter,
    #[default]
    Year,
}

impl AnalyticsPeriod {
    pub fn months(self) -> usize {
        match self {
            Self::HalfYear => 6,
            Self::Quarter => 3,
            Self::Year => 12,
        }
    }

    /// Month labels and revenue in thousands for the period, oldest first.
    pub fn revenue_window(self) -> Vec<(&'static str, u64)> {
        let skip = MONTHLY_REVENUE_K.len() - self.months();
        MONTH_LABELS
            .iter()
            .copied()
            .zip(MONTHLY_REVENUE_K.iter().map(|value| u64::from(*value)))
            .skip(skip)
            .collect()
    }
}

impl Choice for AnalyticsPeriod {
    const KIND: &'static str = "analytics period";

    fn all() -> &'static [Self] {
        &[Self::HalfYear, Self::Quarter, Self::Year]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::HalfYear => "half-year",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::HalfYear => "6 derniers mois",
            Self::Quarter => "Ce trimestre",
            Self::Year => "Cette année",
        }
    }
}

#[component]
pub fn Analytics() -> Element {
    let loading = use_loading_delay(PLACEHOLDER_DELAY_MS / 2);
    let mut period = use_signal(AnalyticsPeriod::default);
    let state = use_app_state();

    let selected = period();
    let options: Vec<(&'static str, &'static str)> = AnalyticsPeriod::all()
        .iter()
        .map(|choice| (choice.as_str(), choice.label()))
        .collect();
    let current = selected.as_str();

    let header = rsx! {
        header { class: "flex flex-col justify-between gap-4 md:flex-row md:items-center",
            div {
                h1 { class: "text-2xl font-bold", "Analytics" }
                p { class: "text-sm text-gray-500", "Analysez vos performances et générez des rapports détaillés" }
            }
            select {
                class: "rounded-xl border border-gray-200 bg-white px-4 py-2 dark:border-gray-700 dark:bg-gray-800",
                value: "{current}",
                onchange: move |evt: FormEvent| match AnalyticsPeriod::parse(&evt.value()) {
                    Ok(choice) => period.set(choice),
                    Err(err) => tracing::warn!(%err, "ignored period value"),
                },
                for (value, label) in options {
                    option { key: "{value}", value: "{value}", "{label}" }
                }
            }
        }
    };

    if loading() {
        return rsx! {
            div { class: "space-y-6",
                {header}
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
    drop(snapshot);

    let window = selected.revenue_window();
    let values: Vec<u64> = window.iter().map(|(_, value)| *value).collect();
    let period_total = Money::euros(values.iter().sum::<u64>() * 1_000).to_thousands_label();
    let bars: Vec<(&'static str, u64, String)> = window
        .iter()
        .zip(relative_widths(&values))
        .map(|((month, value), height)| (*month, *value, format!("{height:.0}%")))
        .collect();

    let stage_counts: Vec<u64> = DealStage::all()
        .iter()
        .map(|stage| pipeline.stage(*stage).count as u64)
        .collect();
    let stages: Vec<(&'static str, usize, f64, &'static str)> = DealStage::all()
        .iter()
        .zip(relative_widths(&stage_counts))
        .map(|(stage, width)| {
            (
                stage.label(),
                pipeline.stage(*stage).count,
                width,
                stage.accent_class(),
            )
        })
        .collect();

    let categories: Vec<(String, usize, f64)> = tickets
        .by_category
        .iter()
        .map(|(category, count)| {
            (
                category.clone(),
                *count,
                percentage(*count as f64, tickets.total as f64),
            )
        })
        .collect();

    let conversion = format_percent(pipeline.conversion_rate);
    let satisfaction = format!("{:.1}/5", clients.average_rating);
    let revenue = clients.revenue.to_thousands_label();
    let completion = format_percent(projects.task_completion);

    rsx! {
        div { class: "space-y-8",
            {header}
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Revenus clients", value: revenue, hint: format!("{period_total} sur la période") }
                StatCard { label: "Clients actifs", value: clients.active.to_string(), hint: format!("{} prospects", clients.prospects) }
                StatCard { label: "Taux de Conversion", value: conversion }
                StatCard { label: "Satisfaction Client", value: satisfaction, hint: format!("Tâches terminées {completion}") }
            }
            section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                h2 { class: "mb-6 font-semibold", "Revenus (k€)" }
                div { class: "flex h-56 items-end gap-2",
                    for (month, value, height) in bars {
                        div { key: "{month}", class: "flex flex-1 flex-col items-center gap-2",
                            span { class: "text-[10px] text-gray-500", "€{value}k" }
                            div { class: "w-full rounded-t bg-gradient-to-t from-cyan-400 via-violet-500 to-pink-500", style: "height: {height}" }
                            span { class: "text-xs text-gray-500", "{month}" }
                        }
                    }
                }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    h2 { class: "mb-4 font-semibold", "Répartition du pipeline" }
                    ul { class: "space-y-3",
                        for (label, count, width, accent) in stages {
                            li { key: "{label}", class: "space-y-1",
                                div { class: "flex justify-between text-sm",
                                    span { "{label}" }
                                    span { class: "font-semibold", "{count}" }
                                }
                                ProgressBar { percent: width, fill: format!("bg-gradient-to-r {accent}") }
                            }
                        }
                    }
                }
                section { class: "rounded-xl border border-gray-200 bg-white p-6 dark:border-gray-800 dark:bg-gray-900",
                    h2 { class: "mb-4 font-semibold", "Tickets par catégorie" }
                    ul { class: "space-y-3",
                        for (category, count, share) in categories {
                            li { key: "{category}", class: "space-y-1",
                                div { class: "flex justify-between text-sm",
                                    span { "{category}" }
                                    span { class: "font-semibold", "{count}" }
                                }
                                ProgressBar { percent: share }
                            }
                        }
                    }
                }
            }
        }
    }
}
