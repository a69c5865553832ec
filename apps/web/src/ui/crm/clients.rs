use dioxus::prelude::*;

use crate::models::{Choice, Client, ClientStatus};
use crate::services::filter::{ClientFilter, RecordFilter};
use crate::services::summary::ClientSummary;
use crate::state::{use_app_actions, use_app_state, AppActions, ClientView, Selection};
use crate::ui::crm::short_date;
use crate::ui::widgets::{choice_select, stars, Badge, EmptyState, Modal, SearchInput, SegmentButton, StatCard};

fn status_class(status: ClientStatus) -> &'static str {
    match status {
        ClientStatus::Active => "bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-400",
        ClientStatus::Inactive => "bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400",
        ClientStatus::Prospect => "bg-blue-100 text-blue-600 dark:bg-blue-900 dark:text-blue-400",
    }
}

#[component]
pub fn Clients() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();
    let crm = &snapshot.crm;

    let summary = ClientSummary::compute(&crm.store.clients);
    let filter = crm.client_filter.clone();
    let visible: Vec<Client> = filter.apply(&crm.store.clients).into_iter().cloned().collect();
    let view = crm.client_view;
    let selected = match &crm.selection {
        Some(Selection::Client(id)) => crm.store.client(id).cloned(),
        _ => None,
    };
    drop(snapshot);

    let revenue = summary.revenue.to_thousands_label();
    let rating = format!("{:.1} / 5", summary.average_rating);
    let query_filter = filter.clone();
    let status_filter = filter.clone();

    rsx! {
        div { class: "space-y-6",
            header { class: "flex flex-col justify-between gap-4 md:flex-row md:items-center",
                div {
                    h1 { class: "text-2xl font-bold", "Clients" }
                    p { class: "text-sm text-gray-500", "Gérez votre portefeuille clients" }
                }
                div { class: "flex gap-2",
                    SegmentButton { label: "Grille", active: view == ClientView::Grid, onclick: move |_| actions.set_client_view(ClientView::Grid) }
                    SegmentButton { label: "Liste", active: view == ClientView::List, onclick: move |_| actions.set_client_view(ClientView::List) }
                }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Total clients", value: summary.total.to_string() }
                StatCard { label: "Clients actifs", value: summary.active.to_string(), hint: format!("{} prospects", summary.prospects) }
                StatCard { label: "Revenus totaux", value: revenue }
                StatCard { label: "Note moyenne", value: rating }
            }
            div { class: "flex flex-col gap-3 md:flex-row",
                SearchInput {
                    value: filter.query.clone(),
                    placeholder: "Rechercher par nom, entreprise ou email...",
                    oninput: move |query: String| actions.set_client_filter(ClientFilter { query, ..query_filter.clone() }),
                }
                {choice_select(filter.status, "Tous les statuts", move |status| {
                    actions.set_client_filter(ClientFilter { status, ..status_filter.clone() })
                })}
            }
            if visible.is_empty() {
                EmptyState { message: "Aucun client ne correspond à votre recherche" }
            } else if view == ClientView::Grid {
                div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                    for client in visible {
                        {client_card(client, actions)}
                    }
                }
            } else {
                {client_table(visible, actions)}
            }
            if let Some(client) = selected {
                Modal {
                    title: client.name.clone(),
                    on_close: move |_| actions.select(None),
                    {client_detail(&client)}
                }
            }
        }
    }
}

fn client_card(client: Client, actions: AppActions) -> Element {
    let initials = client.initials();
    let badge = status_class(client.status);
    let status = client.status.label();
    let rating = stars(client.rating.stars());
    let revenue = client.revenue.to_thousands_label();
    let id = client.id.clone();

    rsx! {
        button {
            key: "{client.id}",
            class: "rounded-xl border border-gray-200 bg-white p-5 text-left shadow-sm transition hover:shadow-md dark:border-gray-800 dark:bg-gray-900",
            onclick: move |_| actions.select(Some(Selection::Client(id.clone()))),
            div { class: "mb-4 flex items-start justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "flex h-12 w-12 items-center justify-center rounded-full bg-gradient-to-br from-cyan-400 to-violet-600 font-bold text-white",
                        "{initials}"
                    }
                    div {
                        p { class: "font-semibold", "{client.name}" }
                        p { class: "text-sm text-gray-500", "{client.company}" }
                    }
                }
                Badge { text: status, class: badge }
            }
            p { class: "text-sm text-yellow-500", "{rating}" }
            div { class: "mt-4 grid grid-cols-2 gap-2 text-sm",
                div {
                    p { class: "text-xs text-gray-500", "Revenus" }
                    p { class: "font-semibold", "{revenue}" }
                }
                div {
                    p { class: "text-xs text-gray-500", "Projets" }
                    p { class: "font-semibold", "{client.projects}" }
                }
            }
            div { class: "mt-4 flex flex-wrap gap-1",
                for tag in client.tags.iter() {
                    span { key: "{tag}", class: "rounded bg-gray-100 px-2 py-0.5 text-xs text-gray-600 dark:bg-gray-800 dark:text-gray-300", "{tag}" }
                }
            }
        }
    }
}

fn client_table(clients: Vec<Client>, actions: AppActions) -> Element {
    rsx! {
        div { class: "overflow-x-auto rounded-xl border border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900",
            table { class: "w-full text-sm",
                thead { class: "bg-gray-50 text-left text-xs uppercase text-gray-500 dark:bg-gray-800",
                    tr {
                        th { class: "px-4 py-3", "Client" }
                        th { class: "px-4 py-3", "Statut" }
                        th { class: "px-4 py-3", "Revenus" }
                        th { class: "px-4 py-3", "Projets" }
                        th { class: "px-4 py-3", "Dernier contact" }
                    }
                }
                tbody {
                    for client in clients {
                        {
                            let id = client.id.clone();
                            let badge = status_class(client.status);
                            let status = client.status.label();
                            let revenue = client.revenue.to_grouped_label();
                            rsx! {
                                tr {
                                    key: "{client.id}",
                                    class: "cursor-pointer border-t border-gray-100 hover:bg-gray-50 dark:border-gray-800 dark:hover:bg-gray-800",
                                    onclick: move |_| actions.select(Some(Selection::Client(id.clone()))),
                                    td { class: "px-4 py-3",
                                        p { class: "font-medium", "{client.name}" }
                                        p { class: "text-xs text-gray-500", "{client.email}" }
                                    }
                                    td { class: "px-4 py-3", Badge { text: status, class: badge } }
                                    td { class: "px-4 py-3", "{revenue}" }
                                    td { class: "px-4 py-3", "{client.projects}" }
                                    td { class: "px-4 py-3 text-gray-500", "{client.last_contact}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn client_detail(client: &Client) -> Element {
    let joined = short_date(client.joined_date);
    let revenue = client.revenue.to_grouped_label();
    let rating = stars(client.rating.stars());

    rsx! {
        div { class: "space-y-4 text-sm",
            p { class: "text-gray-500", "{client.company}" }
            if let Some(description) = client.description.as_ref() {
                p { class: "text-gray-700 dark:text-gray-300", "{description}" }
            }
            dl { class: "grid grid-cols-2 gap-4",
                {detail_row("Email", client.email.clone())}
                {detail_row("Téléphone", client.phone.clone())}
                {detail_row("Adresse", client.address.clone())}
                if let Some(website) = client.website.clone() {
                    {detail_row("Site web", website)}
                }
                {detail_row("Client depuis", joined)}
                {detail_row("Dernier contact", client.last_contact.clone())}
                {detail_row("Revenus", revenue)}
                {detail_row("Note", rating)}
            }
        }
    }
}

pub(crate) fn detail_row(label: &str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "text-xs uppercase text-gray-500", "{label}" }
            dd { class: "mt-1 font-medium text-gray-900 dark:text-white", "{value}" }
        }
    }
}
