use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::fixtures::site::portfolio_items;
use crate::models::{Choice, DealStage, PortfolioItem, RecordId};
use crate::services::contact::{submit_contact, ContactField, ContactForm, ContactSlot, SubmitError};
use crate::services::filter::{ClientFilter, DealFilter, ProjectFilter, TicketFilter};
use crate::services::pipeline::{move_deal, BoardInteraction, PipelineError, PipelinePolicy};
use crate::services::store::CrmStore;
use crate::CONTACT_RELAY;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub type AppSignal = Signal<AppState>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_prefers_dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Clair",
            Self::Dark => "Sombre",
            Self::System => "Système",
        }
    }
}

/// CRM chrome: sidebar, mobile menu, search modal and color scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
    pub search_open: bool,
    pub search_query: String,
    pub dark_mode: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            mobile_menu_open: false,
            search_open: false,
            search_query: String::new(),
            dark_mode: true,
        }
    }
}

impl ShellState {
    pub fn open_search(&mut self) {
        self.search_open = true;
        self.mobile_menu_open = false;
    }

    /// Escape closes overlays, search first.
    pub fn dismiss_overlays(&mut self) {
        if self.search_open {
            self.search_open = false;
            self.search_query.clear();
        } else {
            self.mobile_menu_open = false;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientView {
    #[default]
    Grid,
    List,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectView {
    #[default]
    Grid,
    Timeline,
}

/// Record whose detail modal is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Client(RecordId),
    Deal(RecordId),
    Project(RecordId),
    Ticket(RecordId),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CrmState {
    pub store: CrmStore,
    pub policy: PipelinePolicy,
    pub client_filter: ClientFilter,
    pub deal_filter: DealFilter,
    pub project_filter: ProjectFilter,
    pub ticket_filter: TicketFilter,
    pub client_view: ClientView,
    pub project_view: ProjectView,
    pub selection: Option<Selection>,
    pub board: BoardInteraction,
}

impl CrmState {
    pub fn new(store: CrmStore, policy: PipelinePolicy) -> Self {
        Self {
            store,
            policy,
            ..Self::default()
        }
    }

    pub fn move_deal(&mut self, id: &RecordId, stage: DealStage) -> Result<DealStage, PipelineError> {
        move_deal(&mut self.store.deals, id, stage, self.policy)
    }

    pub fn drop_dragged(&mut self, stage: DealStage) -> Result<Option<DealStage>, PipelineError> {
        self.board.drop_on(&mut self.store.deals, stage, self.policy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    Appearance,
    Team,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        Self::Profile,
        Self::Notifications,
        Self::Security,
        Self::Appearance,
        Self::Team,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profil",
            Self::Notifications => "Notifications",
            Self::Security => "Sécurité",
            Self::Appearance => "Apparence",
            Self::Team => "Équipe",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Admin User".into(),
            email: "admin@globinet.ch".into(),
            phone: "+41 21 123 45 67".into(),
            company: "Globinet".into(),
            role: "Administrateur".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationChannel {
    Email,
    Push,
    Sms,
    WeeklyReport,
    ProjectUpdates,
    NewTickets,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 6] = [
        Self::Email,
        Self::Push,
        Self::Sms,
        Self::WeeklyReport,
        Self::ProjectUpdates,
        Self::NewTickets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Notifications email",
            Self::Push => "Notifications push",
            Self::Sms => "Notifications SMS",
            Self::WeeklyReport => "Rapport hebdomadaire",
            Self::ProjectUpdates => "Mises à jour des projets",
            Self::NewTickets => "Nouveaux tickets",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub weekly_report: bool,
    pub project_updates: bool,
    pub new_tickets: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            weekly_report: true,
            project_updates: true,
            new_tickets: true,
        }
    }
}

impl NotificationSettings {
    fn slot(&mut self, channel: NotificationChannel) -> &mut bool {
        match channel {
            NotificationChannel::Email => &mut self.email,
            NotificationChannel::Push => &mut self.push,
            NotificationChannel::Sms => &mut self.sms,
            NotificationChannel::WeeklyReport => &mut self.weekly_report,
            NotificationChannel::ProjectUpdates => &mut self.project_updates,
            NotificationChannel::NewTickets => &mut self.new_tickets,
        }
    }

    pub fn is_enabled(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Push => self.push,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::WeeklyReport => self.weekly_report,
            NotificationChannel::ProjectUpdates => self.project_updates,
            NotificationChannel::NewTickets => self.new_tickets,
        }
    }

    pub fn toggle(&mut self, channel: NotificationChannel) {
        let slot = self.slot(channel);
        *slot = !*slot;
    }
}

/// Session-local settings screen; nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub two_factor: bool,
    pub theme: ThemePreference,
    pub dirty: bool,
}

impl SettingsState {
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

/// Landing page: loading counter, mobile navigation and portfolio browsing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub loading_progress: u8,
    pub nav_open: bool,
    pub portfolio_category: Option<String>,
    pub selected_project: Option<u32>,
}

impl LandingState {
    pub const LOADING_STEP: u8 = 4;

    pub fn is_loading(&self) -> bool {
        self.loading_progress < 100
    }

    /// Advances the loading counter, saturating at 100.
    pub fn tick_loading(&mut self) {
        self.loading_progress = self
            .loading_progress
            .saturating_add(Self::LOADING_STEP)
            .min(100);
    }

    pub fn visible_portfolio(&self) -> Vec<PortfolioItem> {
        filter_portfolio(portfolio_items(), self.portfolio_category.as_deref())
    }
}

pub fn filter_portfolio(items: Vec<PortfolioItem>, category: Option<&str>) -> Vec<PortfolioItem> {
    match category {
        None => items,
        Some(category) => items
            .into_iter()
            .filter(|item| item.category == category)
            .collect(),
    }
}

/// Distinct portfolio categories in first-seen order.
pub fn portfolio_categories(items: &[PortfolioItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub shell: ShellState,
    pub landing: LandingState,
    pub crm: CrmState,
    pub contact: ContactForm,
    pub settings: SettingsState,
    pub operation: OperationState,
}

impl AppState {
    pub fn new(store: CrmStore, policy: PipelinePolicy) -> Self {
        Self {
            crm: CrmState::new(store, policy),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    fn update(&self, apply: impl FnOnce(&mut AppState)) {
        let mut state = self.state;
        apply(&mut state.write());
    }

    // Shell

    pub fn toggle_sidebar(&self) {
        self.update(|state| state.shell.sidebar_open = !state.shell.sidebar_open);
    }

    pub fn set_mobile_menu(&self, open: bool) {
        self.update(|state| state.shell.mobile_menu_open = open);
    }

    pub fn open_search(&self) {
        self.update(|state| state.shell.open_search());
    }

    pub fn set_search_query(&self, query: String) {
        self.update(|state| state.shell.search_query = query);
    }

    pub fn dismiss_overlays(&self) {
        self.update(|state| state.shell.dismiss_overlays());
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.update(|state| state.shell.dark_mode = enabled);
    }

    // Landing

    pub fn tick_loading(&self) {
        self.update(|state| state.landing.tick_loading());
    }

    pub fn set_nav_open(&self, open: bool) {
        self.update(|state| state.landing.nav_open = open);
    }

    pub fn set_portfolio_category(&self, category: Option<String>) {
        self.update(|state| {
            state.landing.portfolio_category = category;
            state.landing.selected_project = None;
        });
    }

    pub fn select_portfolio_item(&self, id: Option<u32>) {
        self.update(|state| state.landing.selected_project = id);
    }

    // CRM

    pub fn set_client_filter(&self, filter: ClientFilter) {
        self.update(|state| state.crm.client_filter = filter);
    }

    pub fn set_deal_filter(&self, filter: DealFilter) {
        self.update(|state| state.crm.deal_filter = filter);
    }

    pub fn set_project_filter(&self, filter: ProjectFilter) {
        self.update(|state| state.crm.project_filter = filter);
    }

    pub fn set_ticket_filter(&self, filter: TicketFilter) {
        self.update(|state| state.crm.ticket_filter = filter);
    }

    pub fn set_client_view(&self, view: ClientView) {
        self.update(|state| state.crm.client_view = view);
    }

    pub fn set_project_view(&self, view: ProjectView) {
        self.update(|state| state.crm.project_view = view);
    }

    pub fn select(&self, selection: Option<Selection>) {
        self.update(|state| state.crm.selection = selection);
    }

    pub fn start_drag(&self, id: RecordId) {
        self.update(|state| state.crm.board.start_drag(id));
    }

    pub fn end_drag(&self) {
        self.update(|state| state.crm.board.end_drag());
    }

    pub fn toggle_deal_expanded(&self, id: &RecordId) {
        self.update(|state| state.crm.board.toggle_expanded(id));
    }

    pub fn drop_on_stage(&self, stage: DealStage) {
        let mut outcome = Ok(None);
        self.update(|state| outcome = state.crm.drop_dragged(stage));
        self.report_stage_move(stage, outcome);
    }

    pub fn move_deal(&self, id: RecordId, stage: DealStage) {
        let mut outcome = Ok(None);
        self.update(|state| outcome = state.crm.move_deal(&id, stage).map(Some));
        self.report_stage_move(stage, outcome);
    }

    fn report_stage_move(&self, stage: DealStage, outcome: Result<Option<DealStage>, PipelineError>) {
        match outcome {
            Ok(Some(previous)) if previous != stage => {
                info!(from = previous.as_str(), to = stage.as_str(), "deal moved");
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "stage move refused");
                self.record_failure("Pipeline", err.to_string());
            }
        }
    }

    // Settings

    pub fn set_settings_tab(&self, tab: SettingsTab) {
        self.update(|state| state.settings.tab = tab);
    }

    pub fn update_settings(&self, apply: impl FnOnce(&mut SettingsState)) {
        self.update(|state| {
            apply(&mut state.settings);
            state.settings.dirty = true;
        });
    }

    pub fn set_theme(&self, theme: ThemePreference, system_prefers_dark: bool) {
        self.update(|state| {
            state.settings.theme = theme;
            state.settings.dirty = true;
            state.shell.dark_mode = theme.resolve(system_prefers_dark);
        });
    }

    pub fn save_settings(&self) {
        self.update(|state| state.settings.mark_saved());
        self.set_operation_success("Paramètres enregistrés".into());
    }

    // Contact

    pub fn set_contact_field(&self, field: ContactField, value: String) {
        self.update(|state| state.contact.set_field(field, value));
    }

    pub fn dismiss_contact_failure(&self) {
        self.update(|state| state.contact.dismiss_failure());
    }

    /// Validates the form and hands it to the configured relay in the background.
    pub fn submit_contact(&self) {
        let Some(relay) = CONTACT_RELAY.get() else {
            self.record_failure("Formulaire de contact", "relais de contact indisponible".into());
            return;
        };

        let mut actions = *self;
        spawn(async move {
            match submit_contact(&mut actions, relay).await {
                Ok(_) => {
                    let Some(submission_id) = actions.with_form(|form| form.submission_id()) else {
                        return;
                    };
                    #[cfg(target_arch = "wasm32")]
                    gloo_timers::future::TimeoutFuture::new(
                        crate::services::contact::CONFIRMATION_DISPLAY.as_millis() as u32,
                    )
                    .await;
                    actions.with_form(|form| form.finish_confirmation(submission_id));
                }
                Err(SubmitError::InFlight | SubmitError::Invalid(_) | SubmitError::Stale(_)) => {}
                Err(err) => {
                    let status = match &err {
                        SubmitError::Relay { source, .. } => source.status().map(|s| s.as_u16()),
                        _ => None,
                    };
                    actions.record_http_failure(status, "Formulaire de contact", err.to_string());
                }
            }
        });
    }

    // Operation feedback

    pub fn set_operation_success(&self, message: String) {
        self.update(|state| {
            state.operation = OperationState {
                last_message: Some(message),
                ..OperationState::default()
            };
        });
    }

    pub fn record_failure(&self, context: impl Into<String>, message: String) {
        let context = context.into();
        self.update(|state| {
            state.operation = OperationState {
                error: Some(message),
                context: Some(context),
                ..OperationState::default()
            };
        });
    }

    pub fn record_http_failure(&self, status: Option<u16>, context: impl Into<String>, detail: String) {
        let context = context.into();
        self.update(|state| {
            state.operation = OperationState {
                error: Some(detail),
                last_status: status,
                context: Some(context),
                ..OperationState::default()
            };
        });
    }

    pub fn clear_operation_status(&self) {
        self.update(|state| state.operation = OperationState::default());
    }
}

impl ContactSlot for AppActions {
    fn with_form<R>(&mut self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        let mut state = self.state;
        let mut guard = state.write();
        apply(&mut guard.contact)
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions { state }
}
