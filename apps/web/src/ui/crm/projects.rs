use dioxus::prelude::*;
use time::Date;

use crate::fixtures::crm::MONTH_LABELS;
use crate::models::{Choice, Project, ProjectStatus, TaskStatus};
use crate::services::filter::{ProjectFilter, RecordFilter};
use crate::services::summary::{format_percent, percentage, ProjectSummary};
use crate::state::{use_app_actions, use_app_state, AppActions, ProjectView, Selection};
use crate::ui::crm::clients::detail_row;
use crate::ui::crm::short_date;
use crate::ui::widgets::{
    choice_select, Badge, EmptyState, Modal, ProgressBar, SearchInput, SegmentButton, StatCard,
};

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Months shown by the timeline, starting in January.
pub const TIMELINE_MONTHS: usize = 6;

/// Left offset and width of a project bar, in percent of the timeline.
///
/// Only the month of each date is used. Projects starting after the window
/// are not drawn; bars running past it are cut at the last month.
pub fn timeline_span(start: Date, end: Date) -> Option<(f64, f64)> {
    let first = usize::from(u8::from(start.month())) - 1;
    if first >= TIMELINE_MONTHS {
        return None;
    }
    let mut last = usize::from(u8::from(end.month())) - 1;
    if end.year() > start.year() || last >= TIMELINE_MONTHS {
        last = TIMELINE_MONTHS - 1;
    }
    let last = last.max(first);
    let window = TIMELINE_MONTHS as f64;
    Some((
        first as f64 / window * 100.0,
        (last - first + 1) as f64 / window * 100.0,
    ))
}

#[component]
pub fn Projects() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();
    let crm = &snapshot.crm;

    let summary = ProjectSummary::compute(&crm.store.projects);
    let filter = crm.project_filter.clone();
    let visible: Vec<Project> = filter
        .apply(&crm.store.projects)
        .into_iter()
        .cloned()
        .collect();
    let view = crm.project_view;
    let selected = match &crm.selection {
        Some(Selection::Project(id)) => crm.store.project(id).cloned(),
        _ => None,
    };
    drop(snapshot);

    let headline = format!(
        "{} projets • {} actifs • {} de budget total",
        summary.total,
        summary.active,
        summary.total_budget.to_thousands_label()
    );
    let budget = summary.total_budget.to_thousands_label();
    let utilization = format_percent(summary.budget_utilization);
    let tasks = format_percent(summary.task_completion);
    let query_filter = filter.clone();
    let status_filter = filter.clone();

    rsx! {
        div { class: "space-y-6",
            header { class: "flex flex-col justify-between gap-4 md:flex-row md:items-center",
                div {
                    h1 { class: "text-2xl font-bold", "Projets" }
                    p { class: "text-sm text-gray-500", "{headline}" }
                }
                div { class: "flex gap-2",
                    SegmentButton { label: "Grille", active: view == ProjectView::Grid, onclick: move |_| actions.set_project_view(ProjectView::Grid) }
                    SegmentButton { label: "Timeline", active: view == ProjectView::Timeline, onclick: move |_| actions.set_project_view(ProjectView::Timeline) }
                }
            }
            div { class: "grid gap-4 md:grid-cols-2 lg:grid-cols-4",
                StatCard { label: "Projets", value: summary.total.to_string(), hint: format!("{} terminés", summary.completed) }
                StatCard { label: "Budget Total", value: budget }
                StatCard { label: "Budget consommé", value: utilization }
                StatCard { label: "Tâches terminées", value: tasks }
            }
            div { class: "flex flex-col gap-3 md:flex-row",
                SearchInput {
                    value: filter.query.clone(),
                    placeholder: "Rechercher un projet...",
                    oninput: move |query: String| actions.set_project_filter(ProjectFilter { query, ..query_filter.clone() }),
                }
                {choice_select(filter.status, "Tous les statuts", move |status| {
                    actions.set_project_filter(ProjectFilter { status, ..status_filter.clone() })
                })}
            }
            if visible.is_empty() {
                EmptyState { message: "Aucun projet ne correspond à votre recherche" }
            } else if view == ProjectView::Grid {
                div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-3",
                    for project in visible {
                        {project_card(project, actions)}
                    }
                }
            } else {
                {timeline(visible, actions)}
            }
            if let Some(project) = selected {
                Modal {
                    title: project.name.clone(),
                    on_close: move |_| actions.select(None),
                    {project_detail(&project)}
                }
            }
        }
    }
}

fn project_card(project: Project, actions: AppActions) -> Element {
    let id = project.id.clone();
    let status = project.status.label();
    let badge = project.status.badge_class();
    let progress = project.progress.value();
    let spent = percentage(project.spent.as_f64(), project.budget.as_f64());
    let budget_line = format!(
        "{} / {}",
        project.spent.to_thousands_label(),
        project.budget.to_thousands_label()
    );
    let budget_fill = if project.is_over_budget() {
        "bg-red-500"
    } else {
        "bg-gradient-to-r from-green-400 to-emerald-600"
    };
    let counts = project.task_counts();
    let tasks_line = format!("{}/{} terminées", counts.done, counts.total());
    let deadline = short_date(project.end_date);
    let team_size = project.team.len();

    rsx! {
        button {
            key: "{project.id}",
            class: "rounded-xl border border-gray-200 bg-white p-5 text-left shadow-sm transition hover:shadow-md dark:border-gray-800 dark:bg-gray-900",
            onclick: move |_| actions.select(Some(Selection::Project(id.clone()))),
            div { class: "mb-3 flex items-start justify-between gap-2",
                div {
                    h3 { class: "font-semibold", "{project.name}" }
                    p { class: "text-sm text-gray-500", "{project.client}" }
                }
                Badge { text: status, class: badge }
            }
            div { class: "space-y-3 text-sm",
                div {
                    div { class: "mb-1 flex justify-between text-xs text-gray-500",
                        span { "Progression" }
                        span { "{progress}%" }
                    }
                    ProgressBar { percent: f64::from(progress) }
                }
                div {
                    div { class: "mb-1 flex justify-between text-xs text-gray-500",
                        span { "Budget" }
                        span { "{budget_line}" }
                    }
                    ProgressBar { percent: spent, fill: budget_fill }
                }
                div { class: "flex justify-between text-xs text-gray-500",
                    span { "Équipe: {team_size}" }
                    span { "Tâches: {tasks_line}" }
                }
                p { class: "text-xs text-gray-500", "Échéance {deadline}" }
            }
        }
    }
}

fn timeline(projects: Vec<Project>, actions: AppActions) -> Element {
    let months = &MONTH_LABELS[..TIMELINE_MONTHS];

    rsx! {
        div { class: "overflow-x-auto rounded-xl border border-gray-200 bg-white dark:border-gray-800 dark:bg-gray-900",
            div { class: "min-w-[900px]",
                div { class: "flex border-b border-gray-200 dark:border-gray-800",
                    div { class: "w-64 p-4 font-semibold", "Projet" }
                    div { class: "flex flex-1",
                        for month in months.iter() {
                            div { key: "{month}", class: "flex-1 border-l border-gray-200 p-4 text-center text-sm dark:border-gray-800", "{month}" }
                        }
                    }
                }
                for project in projects {
                    {
                        let id = project.id.clone();
                        let span = timeline_span(project.start_date, project.end_date);
                        let accent = project.priority.badge_class();
                        let progress = project.progress.value();
                        rsx! {
                            div {
                                key: "{project.id}",
                                class: "flex cursor-pointer border-b border-gray-200 hover:bg-gray-50 dark:border-gray-800 dark:hover:bg-gray-800",
                                onclick: move |_| actions.select(Some(Selection::Project(id.clone()))),
                                div { class: "w-64 p-4",
                                    p { class: "font-medium", "{project.name}" }
                                    p { class: "text-sm text-gray-500", "{project.client}" }
                                }
                                div { class: "relative flex-1 p-4",
                                    if let Some((offset, width)) = span {
                                        div {
                                            class: "relative h-10 overflow-hidden rounded-lg {accent} bg-opacity-80",
                                            style: "margin-left: {offset}%; width: {width}%",
                                            div {
                                                class: "h-full bg-white/30",
                                                style: "width: {progress}%",
                                            }
                                            span { class: "absolute inset-0 flex items-center px-3 text-xs font-medium text-white", "{progress}%" }
                                        }
                                    } else {
                                        p { class: "text-xs italic text-gray-400", "Hors période" }
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

fn project_detail(project: &Project) -> Element {
    let status = project.status.label();
    let badge = project.status.badge_class();
    let budget = project.budget.to_grouped_label();
    let spent = project.spent.to_grouped_label();
    let period = format!(
        "{} → {}",
        short_date(project.start_date),
        short_date(project.end_date)
    );
    let counts = project.task_counts();
    let team = project.team.join(", ");
    let priority = project.priority.label().to_string();
    let tasks: Vec<(String, String, &'static str, String, bool)> = project
        .tasks
        .iter()
        .map(|task| {
            (
                task.id.to_string(),
                task.name.clone(),
                task.status.label(),
                format!("{} · {}", task.assignee, short_date(task.due_date)),
                task.status == TaskStatus::Done,
            )
        })
        .collect();
    let over_budget = project.is_over_budget() && project.status != ProjectStatus::Completed;

    rsx! {
        div { class: "space-y-6 text-sm",
            div { class: "flex items-center gap-2",
                span { class: "text-gray-500", "{project.client}" }
                Badge { text: status, class: badge }
            }
            p { class: "text-gray-700 dark:text-gray-300", "{project.description}" }
            dl { class: "grid grid-cols-2 gap-4",
                {detail_row("Période", period)}
                {detail_row("Priorité", priority)}
                {detail_row("Budget", budget)}
                {detail_row("Dépensé", spent)}
                {detail_row("Équipe", team)}
            }
            if over_budget {
                p { class: "rounded-lg bg-red-50 p-3 text-red-600 dark:bg-red-950 dark:text-red-300", "Budget dépassé" }
            }
            div {
                h3 { class: "mb-3 font-semibold", "Tâches" }
                div { class: "mb-3 grid grid-cols-3 gap-2 text-center text-xs",
                    div { class: "rounded-lg bg-gray-100 p-2 dark:bg-gray-800", "À faire: {counts.todo}" }
                    div { class: "rounded-lg bg-yellow-100 p-2 dark:bg-yellow-900", "En cours: {counts.in_progress}" }
                    div { class: "rounded-lg bg-green-100 p-2 dark:bg-green-900", "Terminées: {counts.done}" }
                }
                if tasks.is_empty() {
                    p { class: "text-xs italic text-gray-500", "Aucune tâche" }
                }
                ul { class: "space-y-2",
                    for (key, name, state, meta, done) in tasks {
                        li { key: "{key}", class: "flex items-center justify-between rounded-lg border border-gray-100 p-3 dark:border-gray-800",
                            div {
                                p { class: if done { "font-medium line-through text-gray-400" } else { "font-medium" }, "{name}" }
                                p { class: "text-xs text-gray-500", "{meta}" }
                            }
                            span { class: "text-xs text-gray-500", "{state}" }
                        }
                    }
                }
            }
        }
    }
}
