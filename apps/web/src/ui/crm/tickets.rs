use dioxus::prelude::*;

use crate::models::{Choice, Ticket};
use crate::services::filter::{RecordFilter, TicketFilter};
use crate::services::summary::{format_percent, TicketSummary};
use crate::state::{use_app_actions, use_app_state, AppActions, Selection};
use crate::ui::crm::clients::detail_row;
use crate::ui::crm::short_datetime;
use crate::ui::widgets::{choice_select, Badge, EmptyState, Modal, SearchInput, StatCard};

#[component]
pub fn Tickets() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();
    let crm = &snapshot.crm;

    let summary = TicketSummary::compute(&crm.store.tickets);
    let filter = crm.ticket_filter.clone();
    let visible: Vec<Ticket> = filter
        .apply(&crm.store.tickets)
        .into_iter()
        .cloned()
        .collect();
    let selected = match &crm.selection {
        Some(Selection::Ticket(id)) => crm.store.ticket(id).cloned(),
        _ => None,
    };
    drop(snapshot);

    let resolution = format_percent(summary.resolution_rate);
    let query_filter = filter.clone();
    let status_filter = filter.clone();
    let priority_filter = filter.clone();

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold", "Tickets" }
                p { class: "text-sm text-gray-500", "Support et demandes clients" }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Ouverts", value: summary.open.to_string(), hint: format!("{} au total", summary.total) }
                StatCard { label: "En cours", value: summary.in_progress.to_string() }
                StatCard { label: "Urgents", value: summary.urgent.to_string() }
                StatCard { label: "Taux de résolution", value: resolution, hint: format!("{} résolus", summary.resolved) }
            }
            div { class: "flex flex-col gap-3 md:flex-row",
                SearchInput {
                    value: filter.query.clone(),
                    placeholder: "Rechercher par titre, client ou numéro...",
                    oninput: move |query: String| actions.set_ticket_filter(TicketFilter { query, ..query_filter.clone() }),
                }
                {choice_select(filter.status, "Tous les statuts", move |status| {
                    actions.set_ticket_filter(TicketFilter { status, ..status_filter.clone() })
                })}
                {choice_select(filter.priority, "Toutes les priorités", move |priority| {
                    actions.set_ticket_filter(TicketFilter { priority, ..priority_filter.clone() })
                })}
            }
            if visible.is_empty() {
                EmptyState { message: "Aucun ticket ne correspond à vos filtres" }
            } else {
                {ticket_table(visible, actions)}
            }
            if let Some(ticket) = selected {
                Modal {
                    title: ticket.title.clone(),
                    on_close: move |_| actions.select(None),
                    {ticket_detail(&ticket)}
                }
            }
        }
    }
}

fn ticket_table(tickets: Vec<Ticket>, actions: AppActions) -> Element {
    rsx! {
        div { class: "overflow-x-auto rounded-xl border border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900",
            table { class: "w-full text-sm",
                thead { class: "bg-gray-50 text-left text-xs uppercase text-gray-500 dark:bg-gray-800",
                    tr {
                        th { class: "px-4 py-3", "Ticket" }
                        th { class: "px-4 py-3", "Client" }
                        th { class: "px-4 py-3", "Statut" }
                        th { class: "px-4 py-3", "Priorité" }
                        th { class: "px-4 py-3", "Assigné" }
                        th { class: "px-4 py-3", "Mis à jour" }
                    }
                }
                tbody {
                    for ticket in tickets {
                        {
                            let id = ticket.id.clone();
                            let status = ticket.status.label();
                            let status_class = ticket.status.badge_class();
                            let priority = ticket.priority.label();
                            let priority_class = format!("{} text-white", ticket.priority.badge_class());
                            let updated = short_datetime(ticket.updated_at);
                            rsx! {
                                tr {
                                    key: "{ticket.id}",
                                    class: "cursor-pointer border-t border-gray-100 hover:bg-gray-50 dark:border-gray-800 dark:hover:bg-gray-800",
                                    onclick: move |_| actions.select(Some(Selection::Ticket(id.clone()))),
                                    td { class: "px-4 py-3",
                                        p { class: "font-medium", "{ticket.title}" }
                                        p { class: "text-xs text-gray-500", "#{ticket.id} · {ticket.category}" }
                                    }
                                    td { class: "px-4 py-3", "{ticket.client}" }
                                    td { class: "px-4 py-3", Badge { text: status, class: status_class } }
                                    td { class: "px-4 py-3", Badge { text: priority, class: priority_class } }
                                    td { class: "px-4 py-3", "{ticket.assignee}" }
                                    td { class: "px-4 py-3 text-gray-500", "{updated}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn ticket_detail(ticket: &Ticket) -> Element {
    let status = ticket.status.label();
    let status_class = ticket.status.badge_class();
    let priority = ticket.priority.label();
    let priority_class = format!("{} text-white", ticket.priority.badge_class());
    let created = short_datetime(ticket.created_at);
    let updated = short_datetime(ticket.updated_at);

    rsx! {
        div { class: "space-y-6 text-sm",
            div { class: "flex items-center gap-2",
                span { class: "font-mono text-gray-500", "#{ticket.id}" }
                Badge { text: status, class: status_class }
                Badge { text: priority, class: priority_class }
            }
            p { class: "text-gray-700 dark:text-gray-300", "{ticket.description}" }
            dl { class: "grid grid-cols-2 gap-4",
                {detail_row("Client", ticket.client.clone())}
                {detail_row("Assigné à", ticket.assignee.clone())}
                {detail_row("Catégorie", ticket.category.clone())}
                {detail_row("Messages", ticket.messages.to_string())}
                {detail_row("Créé le", created)}
                {detail_row("Mis à jour", updated)}
            }
        }
    }
}
