use super::*;
use time::macros::date;

// =============================================================
// Money
// =============================================================

#[test]
fn thousands_label_rounds_half_up() {
    assert_eq!(Money::euros(125_000).to_thousands_label(), "€125k");
    assert_eq!(Money::euros(125_499).to_thousands_label(), "€125k");
    assert_eq!(Money::euros(45_500).to_thousands_label(), "€46k");
    assert_eq!(Money::euros(0).to_thousands_label(), "€0k");
}

#[test]
fn thousands_label_survives_saturated_totals() {
    let total: Money = [Money::euros(u64::MAX - 10), Money::euros(100)].into_iter().sum();
    assert_eq!(total.amount(), u64::MAX);
    assert_eq!(total.to_thousands_label(), "€18446744073709552k");
    assert_eq!(Money::euros(u64::MAX - 615).to_thousands_label(), "€18446744073709551k");
}

#[test]
fn grouped_label_inserts_commas() {
    assert_eq!(Money::euros(125_430).to_grouped_label(), "€125,430");
    assert_eq!(Money::euros(1_400_000).to_grouped_label(), "€1,400,000");
    assert_eq!(Money::euros(950).to_grouped_label(), "€950");
}

#[test]
fn money_sum_adds_amounts() {
    let total: Money = [Money::euros(10), Money::euros(32)].into_iter().sum();
    assert_eq!(total, Money::euros(42));
}

// =============================================================
// Bounded values
// =============================================================

#[test]
fn percent_rejects_values_above_hundred() {
    assert!(Percent::new(100).is_ok());
    assert_eq!(Percent::new(101), Err(RecordError::PercentOutOfRange(101)));
}

#[test]
fn rating_rejects_values_above_five() {
    assert_eq!(Rating::new(5).map(Rating::stars), Ok(5));
    assert_eq!(Rating::new(6), Err(RecordError::RatingOutOfRange(6)));
}

#[test]
fn percent_deserialization_enforces_bounds() {
    let ok: Percent = serde_json::from_str("80").unwrap();
    assert_eq!(ok.value(), 80);
    assert!(serde_json::from_str::<Percent>("120").is_err());
}

// =============================================================
// Choice parsing
// =============================================================

#[test]
fn choice_parse_accepts_wire_values() {
    assert_eq!(ProjectStatus::parse("on-hold"), Ok(ProjectStatus::OnHold));
    assert_eq!(TicketStatus::parse(" In-Progress "), Ok(TicketStatus::InProgress));
    assert_eq!(DealStage::parse("won"), Ok(DealStage::Won));
}

#[test]
fn choice_parse_rejects_unknown_values() {
    let err = ClientStatus::parse("archived").unwrap_err();
    assert_eq!(
        err,
        RecordError::UnknownVariant {
            kind: "client status",
            value: "archived".into()
        }
    );
}

#[test]
fn choice_wire_value_matches_serde() {
    for status in TicketStatus::all() {
        let json = serde_json::to_string(status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
    }
    for stage in DealStage::all() {
        let json = serde_json::to_string(stage).unwrap();
        assert_eq!(json, format!("\"{}\"", stage.as_str()));
    }
}

#[test]
fn deal_stages_are_listed_in_board_order() {
    let stages = DealStage::all();
    assert!(stages.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(DealStage::Won.is_terminal());
    assert!(!DealStage::Closing.is_terminal());
}

// =============================================================
// Records
// =============================================================

fn project_with_dates(start: Date, end: Date) -> Project {
    Project {
        id: "p-x".into(),
        name: "Demo".into(),
        client: "Acme".into(),
        status: ProjectStatus::Planning,
        progress: Percent::new(0).unwrap(),
        budget: Money::euros(1_000),
        spent: Money::euros(1_500),
        start_date: start,
        end_date: end,
        team: Vec::new(),
        tasks: vec![
            Task {
                id: "t-1".into(),
                name: "a".into(),
                status: TaskStatus::Done,
                assignee: "Alice".into(),
                due_date: start,
                priority: Priority::Low,
            },
            Task {
                id: "t-2".into(),
                name: "b".into(),
                status: TaskStatus::Todo,
                assignee: "Bob".into(),
                due_date: end,
                priority: Priority::High,
            },
        ],
        priority: Priority::Medium,
        description: String::new(),
    }
}

#[test]
fn project_validate_rejects_inverted_dates() {
    let project = project_with_dates(date!(2024 - 03 - 01), date!(2024 - 02 - 01));
    assert!(matches!(
        project.validate(),
        Err(RecordError::InvalidDateRange { .. })
    ));
}

#[test]
fn project_task_counts_and_budget_flags() {
    let project = project_with_dates(date!(2024 - 01 - 01), date!(2024 - 02 - 01));
    assert!(project.validate().is_ok());
    let counts = project.task_counts();
    assert_eq!((counts.todo, counts.in_progress, counts.done), (1, 0, 1));
    assert_eq!(counts.total(), 2);
    assert!(project.is_over_budget());
}

#[test]
fn record_id_serializes_as_plain_string() {
    let id = RecordId::new("T001");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"T001\"");
}
