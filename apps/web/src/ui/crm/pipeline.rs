use dioxus::prelude::*;

use crate::models::{Choice, Deal, DealStage, Money};
use crate::services::filter::DealFilter;
use crate::services::pipeline::stage_columns;
use crate::services::summary::{format_percent, PipelineSummary};
use crate::state::{use_app_actions, use_app_state, AppActions, Selection};
use crate::ui::crm::clients::detail_row;
use crate::ui::crm::short_date;
use crate::ui::widgets::{choice_select, Badge, Modal, ProgressBar, SearchInput, StatCard};

const VISIBLE_TAGS: usize = 2;

/// Owned copy of a kanban column so the board can render without holding the state borrow.
struct ColumnView {
    stage: DealStage,
    cards: Vec<(Deal, bool)>,
    value: Money,
}

#[component]
pub fn Pipeline() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();
    let crm = &snapshot.crm;

    let summary = PipelineSummary::compute(&crm.store.deals);
    let filter = crm.deal_filter.clone();
    let columns: Vec<ColumnView> = stage_columns(&crm.store.deals, &filter)
        .into_iter()
        .map(|column| ColumnView {
            stage: column.stage,
            cards: column
                .deals
                .into_iter()
                .map(|deal| (deal.clone(), crm.board.is_expanded(&deal.id)))
                .collect(),
            value: column.value,
        })
        .collect();
    let dragging = crm.board.dragged().is_some();
    let selected = match &crm.selection {
        Some(Selection::Deal(id)) => crm.store.deal(id).cloned(),
        _ => None,
    };
    drop(snapshot);

    let headline = format!(
        "{} affaires • {} de valeur totale",
        summary.total_deals,
        summary.total_value.to_thousands_label()
    );
    let total_value = summary.total_value.to_thousands_label();
    let average_value = Money::euros(summary.average_value.round() as u64).to_thousands_label();
    let conversion = format_percent(summary.conversion_rate);
    let forecast = Money::euros(summary.weighted_forecast.round() as u64).to_thousands_label();
    let query_filter = filter.clone();
    let priority_filter = filter.clone();

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold", "Pipeline Commercial" }
                p { class: "text-sm text-gray-500", "{headline}" }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Affaires Totales", value: summary.total_deals.to_string(), hint: format!("{} ouvertes", summary.open_deals()) }
                StatCard { label: "Valeur Totale", value: total_value, hint: format!("Prévision pondérée {forecast}") }
                StatCard { label: "Valeur Moyenne", value: average_value }
                StatCard { label: "Taux de Conversion", value: conversion }
            }
            div { class: "flex flex-col gap-3 md:flex-row",
                SearchInput {
                    value: filter.query.clone(),
                    placeholder: "Rechercher une affaire...",
                    oninput: move |query: String| actions.set_deal_filter(DealFilter { query, ..query_filter.clone() }),
                }
                {choice_select(filter.priority, "Toutes les priorités", move |priority| {
                    actions.set_deal_filter(DealFilter { priority, ..priority_filter.clone() })
                })}
            }
            div { class: "flex gap-4 overflow-x-auto pb-4",
                for column in columns {
                    {stage_column(column, dragging, actions)}
                }
            }
            if let Some(deal) = selected {
                Modal {
                    title: deal.title.clone(),
                    on_close: move |_| actions.select(None),
                    {deal_detail(&deal, actions)}
                }
            }
        }
    }
}

fn stage_column(column: ColumnView, dragging: bool, actions: AppActions) -> Element {
    let stage = column.stage;
    let label = stage.label();
    let accent = stage.accent_class();
    let count = column.cards.len();
    let value = column.value.to_thousands_label();
    let drop_hint = if dragging {
        "ring-2 ring-dashed ring-cyan-400/40"
    } else {
        ""
    };
    let cards = column.cards;

    rsx! {
        section {
            key: "{label}",
            class: "flex w-72 flex-shrink-0 flex-col rounded-xl bg-gray-100 p-3 dark:bg-gray-900 {drop_hint}",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| {
                evt.prevent_default();
                actions.drop_on_stage(stage);
            },
            header { class: "mb-3",
                div { class: "mb-2 h-1 rounded-full bg-gradient-to-r {accent}" }
                div { class: "flex items-center justify-between",
                    h2 { class: "font-semibold", "{label}" }
                    span { class: "rounded-full bg-white px-2 text-xs dark:bg-gray-800", "{count}" }
                }
                p { class: "text-xs text-gray-500", "{value}" }
            }
            div { class: "flex-1 space-y-3",
                if cards.is_empty() {
                    p { class: "rounded-lg border-2 border-dashed border-gray-300 py-8 text-center text-xs text-gray-400 dark:border-gray-700",
                        "Aucune affaire"
                    }
                }
                for (deal, open) in cards {
                    {deal_card(deal, open, actions)}
                }
            }
        }
    }
}

fn deal_card(deal: Deal, open: bool, actions: AppActions) -> Element {
    let drag_id = deal.id.clone();
    let toggle_id = deal.id.clone();
    let select_id = deal.id.clone();
    let value = deal.value.to_thousands_label();
    let probability = deal.probability.value();
    let closing = short_date(deal.expected_close_date);
    let priority_dot = deal.priority.badge_class();
    let priority = deal.priority.label();
    let shown_tags: Vec<String> = deal.tags.iter().take(VISIBLE_TAGS).cloned().collect();
    let hidden_tags = deal.tags.len().saturating_sub(VISIBLE_TAGS);
    let toggle_label = if open { "Réduire" } else { "Détails" };

    rsx! {
        article {
            key: "{deal.id}",
            class: "cursor-grab rounded-lg bg-white p-4 shadow-sm transition hover:-translate-y-0.5 hover:shadow-md active:cursor-grabbing dark:bg-gray-800",
            draggable: "true",
            ondragstart: move |_| actions.start_drag(drag_id.clone()),
            ondragend: move |_| actions.end_drag(),
            div { class: "mb-2 flex items-start justify-between gap-2",
                div {
                    h3 { class: "text-sm font-semibold", "{deal.title}" }
                    p { class: "text-xs text-gray-500", "{deal.company}" }
                }
                span { class: "mt-1 h-2 w-2 flex-shrink-0 rounded-full {priority_dot}", title: "{priority}" }
            }
            div { class: "mb-2 flex items-center justify-between text-sm",
                span { class: "font-bold", "{value}" }
                span { class: "text-xs text-gray-500", "{probability}%" }
            }
            ProgressBar { percent: f64::from(probability) }
            div { class: "mt-3 flex flex-wrap gap-1",
                for tag in shown_tags {
                    span { key: "{tag}", class: "rounded bg-gray-100 px-2 py-0.5 text-[10px] text-gray-600 dark:bg-gray-700 dark:text-gray-300", "{tag}" }
                }
                if hidden_tags > 0 {
                    span { class: "text-[10px] text-gray-400", "+{hidden_tags}" }
                }
            }
            if open {
                div { class: "mt-3 space-y-1 border-t border-gray-100 pt-3 text-xs text-gray-500 dark:border-gray-700",
                    p { "👤 {deal.contact}" }
                    p { "📅 {closing}" }
                    p { "🕒 {deal.last_activity}" }
                }
            }
            div { class: "mt-3 flex justify-between text-xs",
                button {
                    class: "text-gray-500 hover:text-cyan-500",
                    onclick: move |_| actions.toggle_deal_expanded(&toggle_id),
                    "{toggle_label}"
                }
                button {
                    class: "text-cyan-600 hover:underline dark:text-cyan-400",
                    onclick: move |_| actions.select(Some(Selection::Deal(select_id.clone()))),
                    "Ouvrir"
                }
            }
        }
    }
}

fn deal_detail(deal: &Deal, actions: AppActions) -> Element {
    let id = deal.id.clone();
    let current = deal.stage.as_str();
    let value = deal.value.to_grouped_label();
    let probability = format!("{}%", deal.probability.value());
    let priority = deal.priority.label();
    let priority_class = format!("{} text-white", deal.priority.badge_class());
    let created = short_date(deal.created_date);
    let closing = short_date(deal.expected_close_date);
    let stages: Vec<(&'static str, &'static str)> = DealStage::all()
        .iter()
        .map(|stage| (stage.as_str(), stage.label()))
        .collect();

    rsx! {
        div { class: "space-y-6 text-sm",
            div { class: "flex items-center gap-2",
                span { class: "text-gray-500", "{deal.company}" }
                Badge { text: priority, class: priority_class }
            }
            dl { class: "grid grid-cols-2 gap-4",
                {detail_row("Valeur", value)}
                {detail_row("Probabilité", probability)}
                {detail_row("Contact", deal.contact.clone())}
                {detail_row("Créée le", created)}
                {detail_row("Clôture prévue", closing)}
                {detail_row("Dernière activité", deal.last_activity.clone())}
            }
            if let Some(notes) = deal.notes.as_ref() {
                p { class: "rounded-lg bg-gray-50 p-3 text-gray-700 dark:bg-gray-800 dark:text-gray-300", "{notes}" }
            }
            label { class: "block space-y-2",
                span { class: "text-xs uppercase text-gray-500", "Étape" }
                select {
                    class: "w-full rounded-lg border border-gray-300 bg-white px-3 py-2 dark:border-gray-700 dark:bg-gray-900",
                    value: "{current}",
                    onchange: move |evt: FormEvent| match DealStage::parse(&evt.value()) {
                        Ok(stage) => actions.move_deal(id.clone(), stage),
                        Err(err) => tracing::warn!(%err, "ignored stage value"),
                    },
                    for (value, label) in stages {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
        }
    }
}
