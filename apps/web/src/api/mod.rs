use anyhow::Context;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use reqwest::{header, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{AppConfig, RelayKind, RelaySettings, EMAILJS_SEND_URL, WEB3FORMS_SUBMIT_URL};
use crate::services::contact::ContactPayload;

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

pub type RelayResult<T> = Result<T, RelayError>;

/// Delay applied by the simulated relay before it reports success.
pub const SIMULATED_DELAY_MS: u32 = 1_000;

/// Anything able to deliver a validated contact submission.
pub trait DeliverContact {
    fn kind(&self) -> RelayKind;

    fn deliver<'a>(&'a self, payload: &'a ContactPayload)
        -> LocalBoxFuture<'a, RelayResult<RelayReceipt>>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReceipt {
    pub relay: RelayKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayReceipt {
    fn new(relay: RelayKind, message: Option<String>) -> Self {
        Self { relay, message }
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{} rejected the submission ({status}): {message}", .relay.as_str())]
    Rejected {
        relay: RelayKind,
        status: StatusCode,
        message: String,
    },
    #[error("invalid relay endpoint: {0}")]
    InvalidEndpoint(String),
    #[error(transparent)]
    Setup(#[from] anyhow::Error),
}

impl RelayError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// The configured contact relay backed by a shared reqwest client.
#[derive(Clone)]
pub struct ContactRelay {
    inner: reqwest::Client,
    settings: RelaySettings,
}

impl ContactRelay {
    pub fn new(config: &AppConfig) -> RelayResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        let client = builder
            .build()
            .context("failed to build reqwest client")?;

        if let RelaySettings::Formspree { endpoint: url } | RelaySettings::MailRelay { url } =
            &config.relay
        {
            Url::parse(url).map_err(|_| RelayError::InvalidEndpoint(url.clone()))?;
        }

        Ok(Self {
            inner: client,
            settings: config.relay.clone(),
        })
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    async fn send(&self, payload: &ContactPayload) -> RelayResult<RelayReceipt> {
        match &self.settings {
            RelaySettings::Simulated => simulate(payload).await,
            RelaySettings::EmailJs {
                service_id,
                template_id,
                public_key,
            } => {
                let body = EmailJsRequest {
                    service_id,
                    template_id,
                    user_id: public_key,
                    template_params: payload,
                };
                let (status, text) = self.post_json(EMAILJS_SEND_URL, &body).await?;
                interpret_emailjs(status, &text)
            }
            RelaySettings::Formspree { endpoint } => {
                let (status, text) = self.post_json(endpoint, payload).await?;
                interpret_formspree(status, &text)
            }
            RelaySettings::Web3Forms { access_key } => {
                let body = Web3FormsRequest {
                    access_key,
                    payload,
                };
                let (status, text) = self.post_json(WEB3FORMS_SUBMIT_URL, &body).await?;
                interpret_web3forms(status, &text)
            }
            RelaySettings::MailRelay { url } => {
                let (status, text) = self.post_json(url, payload).await?;
                interpret_mail_relay(status, &text)
            }
        }
    }

    async fn post_json<T>(&self, url: &str, body: &T) -> RelayResult<(StatusCode, String)>
    where
        T: Serialize + ?Sized,
    {
        debug!(%url, relay = self.kind().as_str(), "posting contact submission");
        let response = self
            .inner
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }
}

impl DeliverContact for ContactRelay {
    fn kind(&self) -> RelayKind {
        self.settings.kind()
    }

    fn deliver<'a>(
        &'a self,
        payload: &'a ContactPayload,
    ) -> LocalBoxFuture<'a, RelayResult<RelayReceipt>> {
        self.send(payload).boxed_local()
    }
}

async fn simulate(payload: &ContactPayload) -> RelayResult<RelayReceipt> {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(SIMULATED_DELAY_MS).await;

    info!(
        name = %payload.name,
        email = %payload.email,
        budget = ?payload.budget,
        "no contact relay configured, simulated delivery"
    );
    Ok(RelayReceipt::new(RelayKind::Simulated, None))
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

#[derive(Serialize)]
struct Web3FormsRequest<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    payload: &'a ContactPayload,
}

fn rejected(relay: RelayKind, status: StatusCode, message: impl Into<String>) -> RelayError {
    RelayError::Rejected {
        relay,
        status,
        message: message.into(),
    }
}

fn body_or(text: &str, fallback: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// EmailJS answers 200 with a plain `OK`; any other status carries the reason as text.
pub fn interpret_emailjs(status: StatusCode, body: &str) -> RelayResult<RelayReceipt> {
    if status == StatusCode::OK {
        return Ok(RelayReceipt::new(RelayKind::EmailJs, None));
    }
    Err(rejected(
        RelayKind::EmailJs,
        status,
        body_or(body, "EmailJS refused the message"),
    ))
}

#[derive(Debug, Default, Deserialize)]
struct FormspreeResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    errors: Vec<FormspreeError>,
}

#[derive(Debug, Deserialize)]
struct FormspreeError {
    message: String,
}

pub fn interpret_formspree(status: StatusCode, body: &str) -> RelayResult<RelayReceipt> {
    let parsed: FormspreeResponse = if body.trim().is_empty() {
        FormspreeResponse::default()
    } else {
        serde_json::from_str(body)?
    };

    if status.is_success() && parsed.ok {
        return Ok(RelayReceipt::new(RelayKind::Formspree, None));
    }

    let message = if parsed.errors.is_empty() {
        format!("unexpected response: {}", body_or(body, "<empty>"))
    } else {
        parsed
            .errors
            .into_iter()
            .map(|error| error.message)
            .collect::<Vec<_>>()
            .join("; ")
    };
    Err(rejected(RelayKind::Formspree, status, message))
}

#[derive(Debug, Deserialize)]
struct Web3FormsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

pub fn interpret_web3forms(status: StatusCode, body: &str) -> RelayResult<RelayReceipt> {
    let parsed: Web3FormsResponse = serde_json::from_str(body)?;
    if status.is_success() && parsed.success {
        return Ok(RelayReceipt::new(RelayKind::Web3Forms, parsed.message));
    }
    Err(rejected(
        RelayKind::Web3Forms,
        status,
        parsed
            .message
            .unwrap_or_else(|| "Web3Forms refused the message".to_string()),
    ))
}

/// Self-hosted relay: `{success, message}` on 200, `{errors}` on 400,
/// `{error, details}` on 500, `{error}` on 405.
pub fn interpret_mail_relay(status: StatusCode, body: &str) -> RelayResult<RelayReceipt> {
    let parsed: Value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(body)?
    };
    let text = |key: &str| parsed.get(key).and_then(Value::as_str).map(str::to_string);

    if status == StatusCode::OK && parsed.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(RelayReceipt::new(RelayKind::MailRelay, text("message")));
    }

    let message = if status == StatusCode::BAD_REQUEST {
        let errors: Vec<String> = parsed
            .get("errors")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        if errors.is_empty() {
            "invalid submission".to_string()
        } else {
            errors.join("; ")
        }
    } else if status == StatusCode::INTERNAL_SERVER_ERROR {
        match (text("error"), text("details")) {
            (Some(error), Some(details)) => format!("{error}: {details}"),
            (Some(error), None) => error,
            (None, Some(details)) => details,
            (None, None) => "delivery failed".to_string(),
        }
    } else {
        text("error")
            .unwrap_or_else(|| format!("unexpected response: {}", body_or(body, "<empty>")))
    };

    Err(rejected(RelayKind::MailRelay, status, message))
}
