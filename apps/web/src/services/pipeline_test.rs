use super::*;
use crate::fixtures::crm::sample_deals;
use crate::models::Priority;
use crate::services::filter::Selector;
use crate::services::summary::PipelineSummary;

fn deals() -> Vec<Deal> {
    sample_deals().expect("fixtures are valid")
}

fn stage_of(deals: &[Deal], id: &str) -> DealStage {
    deals
        .iter()
        .find(|deal| deal.id.as_str() == id)
        .map(|deal| deal.stage)
        .expect("deal exists")
}

// =============================================================
// Moves
// =============================================================

#[test]
fn move_reads_back_target_stage_and_returns_previous() {
    let mut deals = deals();
    let previous = move_deal(
        &mut deals,
        &RecordId::from("d-1"),
        DealStage::Won,
        PipelinePolicy::Permissive,
    )
    .unwrap();

    assert_eq!(previous, DealStage::Negotiation);
    assert_eq!(stage_of(&deals, "d-1"), DealStage::Won);
}

#[test]
fn per_stage_counts_reflect_move_exactly_once() {
    let mut deals = deals();
    let before = PipelineSummary::compute(&deals);

    move_deal(
        &mut deals,
        &RecordId::from("d-2"),
        DealStage::Closing,
        PipelinePolicy::Permissive,
    )
    .unwrap();
    let after = PipelineSummary::compute(&deals);

    assert_eq!(
        after.stage(DealStage::Proposal).count,
        before.stage(DealStage::Proposal).count - 1
    );
    assert_eq!(
        after.stage(DealStage::Closing).count,
        before.stage(DealStage::Closing).count + 1
    );
    assert_eq!(after.total_deals, before.total_deals);
    assert_eq!(after.total_value, before.total_value);
}

#[test]
fn moving_to_current_stage_is_a_no_op() {
    let mut deals = deals();
    let snapshot = deals.clone();
    let previous = move_deal(
        &mut deals,
        &RecordId::from("d-5"),
        DealStage::Lead,
        PipelinePolicy::Guarded,
    )
    .unwrap();
    assert_eq!(previous, DealStage::Lead);
    assert_eq!(deals, snapshot);
}

#[test]
fn unknown_deal_is_reported() {
    let mut deals = deals();
    let err = move_deal(
        &mut deals,
        &RecordId::from("d-99"),
        DealStage::Won,
        PipelinePolicy::Permissive,
    )
    .unwrap_err();
    assert_eq!(err, PipelineError::UnknownDeal(RecordId::from("d-99")));
}

// =============================================================
// Policies
// =============================================================

#[test]
fn permissive_policy_reopens_closed_deals() {
    let mut deals = deals();
    let id = RecordId::from("d-4");
    move_deal(&mut deals, &id, DealStage::Lost, PipelinePolicy::Permissive).unwrap();
    move_deal(&mut deals, &id, DealStage::Lead, PipelinePolicy::Permissive).unwrap();
    assert_eq!(stage_of(&deals, "d-4"), DealStage::Lead);
}

#[test]
fn guarded_policy_refuses_to_leave_terminal_stages() {
    let mut deals = deals();
    let id = RecordId::from("d-4");
    move_deal(&mut deals, &id, DealStage::Won, PipelinePolicy::Guarded).unwrap();

    let err = move_deal(&mut deals, &id, DealStage::Closing, PipelinePolicy::Guarded).unwrap_err();
    assert_eq!(
        err,
        PipelineError::Forbidden {
            from: DealStage::Won,
            to: DealStage::Closing,
        }
    );
    assert_eq!(stage_of(&deals, "d-4"), DealStage::Won);
    assert_eq!(err.to_string(), "cannot move a deal from Gagné to Closing");
}

#[test]
fn guarded_policy_allows_any_move_between_open_stages() {
    let policy = PipelinePolicy::Guarded;
    assert!(policy.allows(DealStage::Closing, DealStage::Lead));
    assert!(policy.allows(DealStage::Lead, DealStage::Lost));
    assert!(!policy.allows(DealStage::Lost, DealStage::Won));
}

#[test]
fn policy_parses_config_values() {
    assert_eq!(PipelinePolicy::parse("Guarded"), Ok(PipelinePolicy::Guarded));
    assert_eq!(PipelinePolicy::parse(" permissive "), Ok(PipelinePolicy::Permissive));
    assert!(PipelinePolicy::parse("strict").is_err());
    assert_eq!(PipelinePolicy::default(), PipelinePolicy::Permissive);
}

// =============================================================
// Board columns
// =============================================================

#[test]
fn columns_cover_every_stage_in_board_order() {
    let deals = deals();
    let columns = stage_columns(&deals, &DealFilter::default());
    let stages: Vec<DealStage> = columns.iter().map(|column| column.stage).collect();
    assert_eq!(stages, DealStage::all().to_vec());

    let placed: usize = columns.iter().map(|column| column.deals.len()).sum();
    assert_eq!(placed, deals.len());

    let proposal = &columns[2];
    assert_eq!(proposal.deals.len(), 2);
    assert_eq!(proposal.value, Money::euros(100_000));
    assert!(columns[5].is_empty());
}

#[test]
fn columns_apply_filter_but_summary_does_not() {
    let deals = deals();
    let filter = DealFilter {
        query: String::new(),
        priority: Selector::Only(Priority::High),
    };
    let columns = stage_columns(&deals, &filter);
    let visible: usize = columns.iter().map(|column| column.deals.len()).sum();
    assert_eq!(visible, 2);
    assert_eq!(columns[2].value, Money::euros(25_000));
    assert_eq!(PipelineSummary::compute(&deals).total_deals, 6);
}

// =============================================================
// Drag and drop
// =============================================================

#[test]
fn drop_moves_dragged_deal_and_clears_drag() {
    let mut deals = deals();
    let mut board = BoardInteraction::default();
    board.start_drag(RecordId::from("d-3"));
    assert_eq!(board.dragged(), Some(&RecordId::from("d-3")));

    let previous = board
        .drop_on(&mut deals, DealStage::Proposal, PipelinePolicy::Permissive)
        .unwrap();
    assert_eq!(previous, Some(DealStage::Qualification));
    assert_eq!(stage_of(&deals, "d-3"), DealStage::Proposal);
    assert!(board.dragged().is_none());
}

#[test]
fn drop_without_drag_changes_nothing() {
    let mut deals = deals();
    let snapshot = deals.clone();
    let mut board = BoardInteraction::default();
    board.start_drag(RecordId::from("d-1"));
    board.end_drag();

    let outcome = board
        .drop_on(&mut deals, DealStage::Lost, PipelinePolicy::Permissive)
        .unwrap();
    assert_eq!(outcome, None);
    assert_eq!(deals, snapshot);
}

#[test]
fn expansion_toggles_per_card() {
    let mut board = BoardInteraction::default();
    let id = RecordId::from("d-2");
    board.toggle_expanded(&id);
    assert!(board.is_expanded(&id));
    assert!(!board.is_expanded(&RecordId::from("d-1")));
    board.toggle_expanded(&id);
    assert!(!board.is_expanded(&id));
}
