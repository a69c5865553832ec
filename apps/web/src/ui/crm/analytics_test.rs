use super::*;

#[test]
fn year_shows_every_month() {
    let window = AnalyticsPeriod::Year.revenue_window();
    assert_eq!(window.len(), 12);
    assert_eq!(window[0], ("Jan", 85));
    assert_eq!(window[11], ("Déc", 165));
}

#[test]
fn quarter_keeps_the_last_three_months() {
    let window = AnalyticsPeriod::Quarter.revenue_window();
    assert_eq!(window, vec![("Oct", 140), ("Nov", 155), ("Déc", 165)]);
    assert_eq!(AnalyticsPeriod::HalfYear.revenue_window().len(), 6);
}

#[test]
fn period_round_trips_through_select_values() {
    for period in AnalyticsPeriod::all() {
        assert_eq!(AnalyticsPeriod::parse(period.as_str()), Ok(*period));
    }
    assert!(AnalyticsPeriod::parse("week").is_err());
}
