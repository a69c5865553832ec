use super::*;
use crate::services::summary::PipelineSummary;

fn crm(policy: PipelinePolicy) -> CrmState {
    CrmState::new(CrmStore::load_sample().expect("fixtures are valid"), policy)
}

// =============================================================
// Shell
// =============================================================

#[test]
fn escape_closes_search_before_mobile_menu() {
    let mut shell = ShellState {
        mobile_menu_open: true,
        ..ShellState::default()
    };
    shell.open_search();
    shell.search_query = "tech".into();
    assert!(shell.search_open);
    assert!(!shell.mobile_menu_open);

    shell.mobile_menu_open = true;
    shell.dismiss_overlays();
    assert!(!shell.search_open);
    assert!(shell.search_query.is_empty());
    assert!(shell.mobile_menu_open);

    shell.dismiss_overlays();
    assert!(!shell.mobile_menu_open);
}

#[test]
fn theme_preference_resolves_against_system() {
    assert!(!ThemePreference::Light.resolve(true));
    assert!(ThemePreference::Dark.resolve(false));
    assert!(ThemePreference::System.resolve(true));
    assert!(!ThemePreference::System.resolve(false));
}

// =============================================================
// CRM
// =============================================================

#[test]
fn crm_state_moves_deals_under_its_policy() {
    let mut state = crm(PipelinePolicy::Guarded);
    let id = RecordId::from("d-4");
    assert_eq!(state.move_deal(&id, DealStage::Lost), Ok(DealStage::Closing));
    assert!(matches!(
        state.move_deal(&id, DealStage::Lead),
        Err(PipelineError::Forbidden { .. })
    ));
    assert_eq!(
        PipelineSummary::compute(&state.store.deals)
            .stage(DealStage::Lost)
            .count,
        1
    );
}

#[test]
fn dragging_onto_a_column_moves_the_deal() {
    let mut state = crm(PipelinePolicy::Permissive);
    state.board.start_drag(RecordId::from("d-5"));
    assert_eq!(state.drop_dragged(DealStage::Qualification), Ok(Some(DealStage::Lead)));
    assert_eq!(
        state
            .store
            .deal(&RecordId::from("d-5"))
            .map(|deal| deal.stage),
        Some(DealStage::Qualification)
    );
}

// =============================================================
// Settings
// =============================================================

#[test]
fn notification_toggles_flip_one_channel() {
    let mut settings = NotificationSettings::default();
    assert!(!settings.is_enabled(NotificationChannel::Sms));
    settings.toggle(NotificationChannel::Sms);
    assert!(settings.is_enabled(NotificationChannel::Sms));
    assert!(settings.is_enabled(NotificationChannel::Email));
}

#[test]
fn saving_settings_clears_dirty_flag() {
    let mut settings = SettingsState {
        dirty: true,
        ..SettingsState::default()
    };
    settings.mark_saved();
    assert!(!settings.dirty);
    assert_eq!(SettingsTab::ALL.len(), 5);
}

// =============================================================
// Landing
// =============================================================

#[test]
fn loading_counter_saturates_at_one_hundred() {
    let mut landing = LandingState::default();
    assert!(landing.is_loading());
    for _ in 0..40 {
        landing.tick_loading();
    }
    assert_eq!(landing.loading_progress, 100);
    assert!(!landing.is_loading());
}

#[test]
fn portfolio_filter_by_category() {
    let items = portfolio_items();
    let categories = portfolio_categories(&items);
    assert_eq!(categories.len(), items.len());
    assert_eq!(categories[0], "Web App");

    let filtered = filter_portfolio(items.clone(), Some("Finance"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Fintech Pro");
    assert_eq!(filter_portfolio(items.clone(), None).len(), items.len());

    let landing = LandingState {
        portfolio_category: Some("Mobile App".into()),
        ..LandingState::default()
    };
    assert_eq!(landing.visible_portfolio().len(), 1);
}
