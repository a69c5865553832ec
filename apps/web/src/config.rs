use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::pipeline::PipelinePolicy;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const WEB3FORMS_SUBMIT_URL: &str = "https://api.web3forms.com/submit";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppProfile {
    Dev,
    Prod,
}

impl AppProfile {
    pub fn from_env(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("prod") | Some("production") => Self::Prod,
            _ => Self::Dev,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayKind {
    #[serde(rename = "simulated")]
    Simulated,
    #[serde(rename = "emailjs")]
    EmailJs,
    #[serde(rename = "formspree")]
    Formspree,
    #[serde(rename = "web3forms")]
    Web3Forms,
    #[serde(rename = "mail_relay")]
    MailRelay,
}

impl RelayKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" | "" => Some(Self::Simulated),
            "emailjs" => Some(Self::EmailJs),
            "formspree" => Some(Self::Formspree),
            "web3forms" => Some(Self::Web3Forms),
            "mail_relay" | "php" => Some(Self::MailRelay),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::EmailJs => "emailjs",
            Self::Formspree => "formspree",
            Self::Web3Forms => "web3forms",
            Self::MailRelay => "mail_relay",
        }
    }
}

/// The one relay contact submissions go through, with its credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelaySettings {
    #[default]
    Simulated,
    EmailJs {
        service_id: String,
        template_id: String,
        public_key: String,
    },
    Formspree {
        endpoint: String,
    },
    Web3Forms {
        access_key: String,
    },
    MailRelay {
        url: String,
    },
}

impl RelaySettings {
    pub fn kind(&self) -> RelayKind {
        match self {
            Self::Simulated => RelayKind::Simulated,
            Self::EmailJs { .. } => RelayKind::EmailJs,
            Self::Formspree { .. } => RelayKind::Formspree,
            Self::Web3Forms { .. } => RelayKind::Web3Forms,
            Self::MailRelay { .. } => RelayKind::MailRelay,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub profile: AppProfile,
    pub relay: RelaySettings,
    pub request_timeout: Duration,
    pub pipeline_policy: PipelinePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: AppProfile::Dev,
            relay: RelaySettings::Simulated,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            pipeline_policy: PipelinePolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        crate::config::load_dotenv();

        Self::from_lookup(read_env)
    }

    /// Builds the configuration from any key/value view of the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        config.profile = AppProfile::from_env(read("GLOBINET_PROFILE"));

        if let Some(secs) =
            read("GLOBINET_REQUEST_TIMEOUT_SECS").and_then(|value| value.parse::<u64>().ok())
        {
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(raw) = read("GLOBINET_PIPELINE_POLICY") {
            match PipelinePolicy::parse(&raw) {
                Ok(policy) => config.pipeline_policy = policy,
                Err(err) => warn!(%err, "ignoring pipeline policy"),
            }
        }

        let requested = match read("GLOBINET_CONTACT_RELAY") {
            Some(raw) => RelayKind::parse(&raw).unwrap_or_else(|| {
                warn!(relay = %raw, "unknown contact relay, using simulated");
                RelayKind::Simulated
            }),
            None => RelayKind::Simulated,
        };

        config.relay = relay_settings(requested, &read).unwrap_or_else(|missing| {
            warn!(
                relay = requested.as_str(),
                missing, "contact relay is missing credentials, using simulated"
            );
            RelaySettings::Simulated
        });

        config
    }

    pub fn is_production(&self) -> bool {
        self.profile == AppProfile::Prod
    }
}

/// Resolves the credentials of `kind`, or names the first missing key.
fn relay_settings<F>(kind: RelayKind, read: &F) -> Result<RelaySettings, &'static str>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |key: &'static str| read(key).ok_or(key);

    match kind {
        RelayKind::Simulated => Ok(RelaySettings::Simulated),
        RelayKind::EmailJs => Ok(RelaySettings::EmailJs {
            service_id: require("GLOBINET_EMAILJS_SERVICE_ID")?,
            template_id: require("GLOBINET_EMAILJS_TEMPLATE_ID")?,
            public_key: require("GLOBINET_EMAILJS_PUBLIC_KEY")?,
        }),
        RelayKind::Formspree => Ok(RelaySettings::Formspree {
            endpoint: require("GLOBINET_FORMSPREE_ENDPOINT")?,
        }),
        RelayKind::Web3Forms => Ok(RelaySettings::Web3Forms {
            access_key: require("GLOBINET_WEB3FORMS_ACCESS_KEY")?,
        }),
        RelayKind::MailRelay => Ok(RelaySettings::MailRelay {
            url: require("GLOBINET_MAIL_RELAY_URL")?,
        }),
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| option_env_from_build(key).map(|s| s.to_string()))
}

fn option_env_from_build(key: &str) -> Option<&'static str> {
    match key {
        "GLOBINET_PROFILE" => option_env!("GLOBINET_PROFILE"),
        "GLOBINET_CONTACT_RELAY" => option_env!("GLOBINET_CONTACT_RELAY"),
        "GLOBINET_EMAILJS_SERVICE_ID" => option_env!("GLOBINET_EMAILJS_SERVICE_ID"),
        "GLOBINET_EMAILJS_TEMPLATE_ID" => option_env!("GLOBINET_EMAILJS_TEMPLATE_ID"),
        "GLOBINET_EMAILJS_PUBLIC_KEY" => option_env!("GLOBINET_EMAILJS_PUBLIC_KEY"),
        "GLOBINET_FORMSPREE_ENDPOINT" => option_env!("GLOBINET_FORMSPREE_ENDPOINT"),
        "GLOBINET_WEB3FORMS_ACCESS_KEY" => option_env!("GLOBINET_WEB3FORMS_ACCESS_KEY"),
        "GLOBINET_MAIL_RELAY_URL" => option_env!("GLOBINET_MAIL_RELAY_URL"),
        "GLOBINET_REQUEST_TIMEOUT_SECS" => option_env!("GLOBINET_REQUEST_TIMEOUT_SECS"),
        "GLOBINET_PIPELINE_POLICY" => option_env!("GLOBINET_PIPELINE_POLICY"),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        if !matches!(err, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            tracing::warn!("failed to load .env: {err}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn load_dotenv() {}
