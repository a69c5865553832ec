use super::*;

fn store() -> CrmStore {
    CrmStore::load_sample().expect("fixtures are valid")
}

fn ids<R>(records: &[&R], id: impl Fn(&R) -> &RecordId) -> Vec<String> {
    records.iter().map(|record| id(*record).to_string()).collect()
}

// =============================================================
// Query matching
// =============================================================

#[test]
fn blank_query_matches_every_record() {
    let store = store();
    assert!(store.clients.iter().all(|client| matches_query(client, "")));
    assert!(store.clients.iter().all(|client| matches_query(client, "   ")));
}

#[test]
fn query_is_case_insensitive_over_declared_fields() {
    let store = store();
    let filter = ClientFilter {
        query: "TECHCORP".into(),
        ..Default::default()
    };
    let visible = filter.apply(&store.clients);
    assert_eq!(ids(&visible, |c: &Client| &c.id), vec!["c-1"]);

    let by_email = ClientFilter {
        query: "startupx.io".into(),
        ..Default::default()
    };
    assert_eq!(by_email.apply(&store.clients).len(), 1);
}

#[test]
fn query_ignores_fields_outside_search_set() {
    let store = store();
    // Phone numbers are not searchable.
    let filter = ClientFilter {
        query: "+41 21".into(),
        ..Default::default()
    };
    assert!(filter.apply(&store.clients).is_empty());
}

#[test]
fn ticket_query_matches_identifier() {
    let store = store();
    let filter = TicketFilter {
        query: "t003".into(),
        ..Default::default()
    };
    let visible = filter.apply(&store.tickets);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Problème de performance");
}

// =============================================================
// Categorical selectors
// =============================================================

#[test]
fn active_status_returns_three_clients_in_order() {
    let store = store();
    let filter = ClientFilter {
        query: String::new(),
        status: Selector::Only(ClientStatus::Active),
    };
    let visible = filter.apply(&store.clients);
    assert_eq!(ids(&visible, |c: &Client| &c.id), vec!["c-1", "c-2", "c-4"]);
}

#[test]
fn prospect_status_with_empty_query_returns_one_client() {
    let store = store();
    let filter = ClientFilter {
        query: String::new(),
        status: Selector::parse("prospect").unwrap(),
    };
    let visible = filter.apply(&store.clients);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Pierre Martin");
}

#[test]
fn all_selector_is_identity_on_its_axis() {
    let store = store();
    let everything = TicketFilter::default().apply(&store.tickets);
    assert_eq!(everything.len(), store.tickets.len());

    let narrowed = TicketFilter {
        query: "bug".into(),
        status: Selector::All,
        priority: Selector::All,
    };
    let by_query_only: Vec<_> = store
        .tickets
        .iter()
        .filter(|ticket| matches_query(*ticket, "bug"))
        .collect();
    assert_eq!(narrowed.apply(&store.tickets), by_query_only);
}

#[test]
fn combined_selectors_intersect() {
    let store = store();
    let filter = TicketFilter {
        query: String::new(),
        status: Selector::Only(TicketStatus::InProgress),
        priority: Selector::Only(Priority::High),
    };
    let visible = filter.apply(&store.tickets);
    assert_eq!(ids(&visible, |t: &Ticket| &t.id), vec!["T005"]);
}

#[test]
fn filtering_is_idempotent() {
    let store = store();
    let filter = ProjectFilter {
        query: "plateforme".into(),
        status: Selector::Only(ProjectStatus::Active),
    };
    let once: Vec<Project> = filter.apply(&store.projects).into_iter().cloned().collect();
    let twice: Vec<Project> = filter.apply(&once).into_iter().cloned().collect();
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[test]
fn no_match_yields_empty_result() {
    let store = store();
    let filter = DealFilter {
        query: "introuvable".into(),
        priority: Selector::All,
    };
    assert!(filter.apply(&store.deals).is_empty());
}

#[test]
fn selector_parse_round_trips_select_values() {
    assert_eq!(Selector::<ProjectStatus>::parse("all"), Ok(Selector::All));
    assert_eq!(Selector::<ProjectStatus>::parse(""), Ok(Selector::All));
    let on_hold = Selector::<ProjectStatus>::parse("on-hold").unwrap();
    assert_eq!(on_hold.as_str(), "on-hold");
    assert!(Selector::<Priority>::parse("critical").is_err());
}

// =============================================================
// Global search
// =============================================================

#[test]
fn global_search_spans_every_record_kind() {
    let store = store();
    let hits = search_everything(&store, "techcorp", 5);
    let kinds: Vec<SearchHitKind> = hits.iter().map(|hit| hit.kind).collect();
    assert!(kinds.contains(&SearchHitKind::Client));
    assert!(kinds.contains(&SearchHitKind::Deal));
    assert!(kinds.contains(&SearchHitKind::Project));
    assert!(kinds.contains(&SearchHitKind::Ticket));
}

#[test]
fn global_search_ignores_blank_query_and_caps_each_kind() {
    let store = store();
    assert!(search_everything(&store, "  ", 5).is_empty());

    let capped = search_everything(&store, "e", 1);
    for kind in [
        SearchHitKind::Client,
        SearchHitKind::Deal,
        SearchHitKind::Project,
        SearchHitKind::Ticket,
    ] {
        assert!(capped.iter().filter(|hit| hit.kind == kind).count() <= 1);
    }
}
