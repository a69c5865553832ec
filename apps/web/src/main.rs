#![allow(non_snake_case)]

mod api;
mod config;
mod effects;
mod fixtures;
mod hooks;
mod models;
mod services;
mod state;
mod ui;

use api::{ContactRelay, RelayError};
use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use services::store::CrmStore;
use state::AppState;
use tracing::{error, info};
use ui::crm::analytics::Analytics;
use ui::crm::clients::Clients;
use ui::crm::dashboard::CrmDashboard;
use ui::crm::pipeline::Pipeline;
use ui::crm::projects::Projects;
use ui::crm::settings::Settings;
use ui::crm::tickets::Tickets;
use ui::crm::CrmLayout;
use ui::notifications::NotificationCenter;
use ui::site::legal::{LegalNotice, NotFound, PrivacyPolicy, TermsOfSale};
use ui::site::Landing;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static CONTACT_RELAY: OnceCell<ContactRelay> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    init_logging(&config);
    bootstrap_infrastructure(config);
    launch(App);
}

fn init_logging(config: &AppConfig) {
    static INIT: std::sync::Once = std::sync::Once::new();
    let level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) {
    match ContactRelay::new(&config) {
        Ok(relay) => {
            info!(relay = relay.settings().kind().as_str(), "contact relay initialized");
            let _ = CONTACT_RELAY.set(relay);
        }
        Err(err) => {
            report_relay_error("failed to initialize contact relay", &err);
        }
    }
    let _ = APP_CONFIG.set(config);
}

fn report_relay_error(context: &str, err: &RelayError) {
    error!(%context, ?err, status = ?err.status(), "relay bootstrap error");
}

#[component]
fn App() -> Element {
    let app_state = use_signal(|| {
        let store = CrmStore::load_sample().unwrap_or_else(|err| {
            error!(%err, "sample CRM data rejected, starting empty");
            CrmStore::default()
        });
        let policy = APP_CONFIG
            .get()
            .map(|config| config.pipeline_policy)
            .unwrap_or_default();
        AppState::new(store, policy)
    });

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/")]
    Landing {},
    #[route("/mentions-legales")]
    LegalNotice {},
    #[route("/politique-confidentialite")]
    PrivacyPolicy {},
    #[route("/cgv")]
    TermsOfSale {},
    #[nest("/crm")]
        #[layout(CrmLayout)]
            #[route("/")]
            CrmDashboard {},
            #[route("/clients")]
            Clients {},
            #[route("/pipeline")]
            Pipeline {},
            #[route("/projects")]
            Projects {},
            #[route("/tickets")]
            Tickets {},
            #[route("/analytics")]
            Analytics {},
            #[route("/settings")]
            Settings {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
