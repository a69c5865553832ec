use super::*;
use time::macros::date;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

#[test]
fn span_covers_start_to_end_month() {
    let (offset, width) = timeline_span(date!(2024 - 02 - 10), date!(2024 - 04 - 30)).unwrap();
    assert!(close(offset, 100.0 / 6.0));
    assert!(close(width, 50.0));
}

#[test]
fn single_month_project_has_one_column() {
    let (offset, width) = timeline_span(date!(2024 - 01 - 03), date!(2024 - 01 - 20)).unwrap();
    assert!(close(offset, 0.0));
    assert!(close(width, 100.0 / 6.0));
}

#[test]
fn bars_are_cut_at_the_window_edge() {
    let (offset, width) = timeline_span(date!(2024 - 05 - 01), date!(2024 - 09 - 30)).unwrap();
    assert!(close(offset, 400.0 / 6.0));
    assert!(close(width, 200.0 / 6.0));

    let (_, across_year) = timeline_span(date!(2023 - 03 - 01), date!(2024 - 02 - 01)).unwrap();
    assert!(close(across_year, 400.0 / 6.0));
}

#[test]
fn projects_starting_after_june_are_not_drawn() {
    assert_eq!(timeline_span(date!(2024 - 07 - 01), date!(2024 - 08 - 01)), None);
}
