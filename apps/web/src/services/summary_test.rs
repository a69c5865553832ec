use super::*;
use crate::services::store::CrmStore;

fn store() -> CrmStore {
    CrmStore::load_sample().expect("fixtures are valid")
}

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

// =============================================================
// Empty inputs
// =============================================================

#[test]
fn ratio_with_zero_denominator_is_zero() {
    assert_eq!(ratio(3.0, 0.0), 0.0);
    assert_eq!(percentage(0.0, 0.0), 0.0);
}

#[test]
fn empty_lists_produce_zero_ratios() {
    let clients = ClientSummary::compute(&[]);
    assert_eq!(clients.total, 0);
    assert_eq!(clients.average_rating, 0.0);

    let pipeline = PipelineSummary::compute(&[]);
    assert_eq!(pipeline.conversion_rate, 0.0);
    assert_eq!(pipeline.average_value, 0.0);
    assert!(!pipeline.conversion_rate.is_nan());
    assert_eq!(pipeline.by_stage.len(), DealStage::all().len());

    let projects = ProjectSummary::compute(&[]);
    assert_eq!(projects.budget_utilization, 0.0);
    assert_eq!(projects.task_completion, 0.0);

    let tickets = TicketSummary::compute(&[]);
    assert_eq!(tickets.resolution_rate, 0.0);
    assert!(tickets.by_category.is_empty());
}

// =============================================================
// Fixture aggregates
// =============================================================

#[test]
fn client_summary_counts_by_status() {
    let summary = ClientSummary::compute(&store().clients);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.prospects, 1);
    assert_eq!(summary.inactive, 1);
    assert_eq!(summary.revenue, Money::euros(350_000));
    assert_eq!(summary.revenue.to_thousands_label(), "€350k");
    assert!(close(summary.average_rating, 4.2));
}

#[test]
fn pipeline_summary_totals_and_forecast() {
    let summary = PipelineSummary::compute(&store().deals);
    assert_eq!(summary.total_deals, 6);
    assert_eq!(summary.total_value, Money::euros(335_000));
    assert!(close(summary.average_value, 335_000.0 / 6.0));
    assert_eq!(summary.conversion_rate, 0.0);
    assert!(close(summary.weighted_forecast, 233_000.0));
    assert_eq!(
        summary.stage(DealStage::Proposal),
        StageTally {
            count: 2,
            value: Money::euros(100_000)
        }
    );
    assert_eq!(summary.stage(DealStage::Won).count, 0);
    assert_eq!(summary.open_deals(), 6);
}

#[test]
fn project_summary_budget_and_tasks() {
    let summary = ProjectSummary::compute(&store().projects);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.total_budget, Money::euros(390_000));
    assert_eq!(summary.total_spent, Money::euros(175_000));
    assert!(close(summary.budget_utilization, 175_000.0 / 390_000.0 * 100.0));
    assert!(close(summary.task_completion, 30.0));
}

#[test]
fn ticket_summary_counts_and_categories() {
    let summary = TicketSummary::compute(&store().tickets);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.open, 1);
    assert_eq!(summary.in_progress, 2);
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.urgent, 1);
    assert!(close(summary.resolution_rate, 40.0));
    assert_eq!(summary.by_category.get("Bug"), Some(&2));
    assert_eq!(summary.by_category.len(), 4);
}

#[test]
fn summaries_ignore_active_filters() {
    use crate::services::filter::{ClientFilter, RecordFilter, Selector};

    let store = store();
    let filter = ClientFilter {
        query: String::new(),
        status: Selector::Only(ClientStatus::Prospect),
    };
    assert_eq!(filter.apply(&store.clients).len(), 1);
    assert_eq!(ClientSummary::compute(&store.clients).total, 5);
}

// =============================================================
// Dashboard helpers
// =============================================================

#[test]
fn priority_projects_are_pending_and_sorted_by_deadline() {
    let store = store();
    let ids: Vec<&str> = priority_projects(&store.projects, 5)
        .into_iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(ids, vec!["p-1", "p-2", "p-4"]);
    assert_eq!(priority_projects(&store.projects, 1).len(), 1);
}

#[test]
fn relative_widths_scale_to_largest_value() {
    assert_eq!(relative_widths(&[50, 100, 0]), vec![50.0, 100.0, 0.0]);
    assert_eq!(relative_widths(&[0, 0]), vec![0.0, 0.0]);
    assert!(relative_widths(&[]).is_empty());
}

#[test]
fn percent_label_uses_one_decimal() {
    assert_eq!(format_percent(32.456), "32.5%");
    assert_eq!(format_percent(0.0), "0.0%");
}
