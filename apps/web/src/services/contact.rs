use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::{DeliverContact, RelayError, RelayReceipt};
use crate::models::{Choice, RecordError};

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long the sent confirmation stays up before the form is cleared.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_millis(3_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetBracket {
    #[serde(rename = "<10k")]
    Under10k,
    #[serde(rename = "10-25k")]
    From10kTo25k,
    #[serde(rename = "25-50k")]
    From25kTo50k,
    #[serde(rename = "50-100k")]
    From50kTo100k,
    #[serde(rename = ">100k")]
    Over100k,
}

impl Choice for BudgetBracket {
    const KIND: &'static str = "budget bracket";

    fn all() -> &'static [Self] {
        &[
            Self::Under10k,
            Self::From10kTo25k,
            Self::From25kTo50k,
            Self::From50kTo100k,
            Self::Over100k,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Under10k => "<10k",
            Self::From10kTo25k => "10-25k",
            Self::From25kTo50k => "25-50k",
            Self::From50kTo100k => "50-100k",
            Self::Over100k => ">100k",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Under10k => "< 10 000€",
            Self::From10kTo25k => "10 000€ - 25 000€",
            Self::From25kTo50k => "25 000€ - 50 000€",
            Self::From50kTo100k => "50 000€ - 100 000€",
            Self::Over100k => "> 100 000€",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Project,
    Budget,
    Message,
}

impl ContactField {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Project => "project",
            Self::Budget => "budget",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Votre nom",
            Self::Email => "Votre email",
            Self::Company => "Entreprise",
            Self::Project => "Type de projet",
            Self::Budget => "Budget",
            Self::Message => "Votre message",
        }
    }
}

/// Raw form inputs as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project: String,
    pub budget: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Project => &self.project,
            ContactField::Budget => &self.budget,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Project => &mut self.project,
            ContactField::Budget => &mut self.budget,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<ContactPayload, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::NameRequired);
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.push(ValidationError::InvalidEmail);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(ValidationError::MessageRequired);
        }

        let budget = match self.budget.trim() {
            "" => None,
            raw => match BudgetBracket::parse(raw) {
                Ok(bracket) => Some(bracket),
                Err(err) => {
                    errors.push(ValidationError::UnknownBudget(err));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            company: optional(&self.company),
            project: optional(&self.project),
            budget,
            message: message.to_string(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Structural address check: one `@`, a local part and a dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Validated submission as sent to the relay.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project: Option<String>,
    pub budget: Option<BudgetBracket>,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Le nom est requis")]
    NameRequired,
    #[error("Email invalide")]
    InvalidEmail,
    #[error("Le message est requis")]
    MessageRequired,
    #[error("Budget inconnu: {0}")]
    UnknownBudget(RecordError),
}

impl ValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::NameRequired => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MessageRequired => ContactField::Message,
            Self::UnknownBudget(_) => ContactField::Budget,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("submission {submission_id} failed: {source}")]
    Relay {
        submission_id: Uuid,
        #[source]
        source: RelayError,
    },
    #[error("outcome of submission {0} arrived after it was superseded")]
    Stale(Uuid),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    Submitting,
    Sent,
    Failed(String),
}

/// Request handed to the relay once the form has been validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub submission_id: Uuid,
    pub payload: ContactPayload,
}

/// Contact form: draft inputs, field errors and submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub phase: SubmissionPhase,
    pub errors: Vec<ValidationError>,
    submission_id: Option<Uuid>,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.retain(|error| error.field() != field);
    }

    pub fn error_for(&self, field: ContactField) -> Option<&ValidationError> {
        self.errors.iter().find(|error| error.field() == field)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn submission_id(&self) -> Option<Uuid> {
        self.submission_id
    }

    /// Validates the draft and moves to `Submitting`. Nothing is sent on error.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting() {
            warn!(submission_id = ?self.submission_id, "contact submission already in flight");
            return Err(SubmitError::InFlight);
        }

        match self.draft.validate() {
            Ok(payload) => {
                let submission_id = Uuid::new_v4();
                self.errors.clear();
                self.phase = SubmissionPhase::Submitting;
                self.submission_id = Some(submission_id);
                info!(%submission_id, "contact submission started");
                Ok(PendingSubmission {
                    submission_id,
                    payload,
                })
            }
            Err(errors) => {
                info!(count = errors.len(), "contact form rejected by validation");
                self.errors = errors.clone();
                self.phase = SubmissionPhase::Editing;
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// Records the relay outcome. Fields are kept on failure.
    pub fn complete(
        &mut self,
        submission_id: Uuid,
        outcome: Result<RelayReceipt, RelayError>,
    ) -> Result<RelayReceipt, SubmitError> {
        if self.submission_id != Some(submission_id) || !self.is_submitting() {
            warn!(%submission_id, "ignoring outcome of a stale submission");
            return Err(SubmitError::Stale(submission_id));
        }

        match outcome {
            Ok(receipt) => {
                info!(%submission_id, relay = receipt.relay.as_str(), "contact submission delivered");
                self.phase = SubmissionPhase::Sent;
                Ok(receipt)
            }
            Err(source) => {
                error!(%submission_id, %source, "contact submission failed");
                self.phase = SubmissionPhase::Failed(
                    "L'envoi a échoué. Veuillez réessayer dans un instant.".to_string(),
                );
                Err(SubmitError::Relay {
                    submission_id,
                    source,
                })
            }
        }
    }

    /// Clears the form after the confirmation has been shown, unless a newer
    /// submission replaced the one that scheduled the reset.
    pub fn finish_confirmation(&mut self, submission_id: Uuid) -> bool {
        if self.phase != SubmissionPhase::Sent || self.submission_id != Some(submission_id) {
            return false;
        }
        self.draft = ContactDraft::default();
        self.errors.clear();
        self.phase = SubmissionPhase::Editing;
        self.submission_id = None;
        true
    }

    pub fn dismiss_failure(&mut self) {
        if matches!(self.phase, SubmissionPhase::Failed(_)) {
            self.phase = SubmissionPhase::Editing;
        }
    }
}

/// Short-lived mutable access to wherever the contact form lives.
pub trait ContactSlot {
    fn with_form<R>(&mut self, apply: impl FnOnce(&mut ContactForm) -> R) -> R;
}

impl ContactSlot for ContactForm {
    fn with_form<R>(&mut self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        apply(self)
    }
}

/// Validates, delivers through `relay` and records the outcome.
///
/// The form is only borrowed around the synchronous steps, never across the
/// relay call.
pub async fn submit_contact<S: ContactSlot>(
    slot: &mut S,
    relay: &dyn DeliverContact,
) -> Result<RelayReceipt, SubmitError> {
    let pending = slot.with_form(ContactForm::begin_submit)?;
    let outcome = relay.deliver(&pending.payload).await;
    slot.with_form(|form| form.complete(pending.submission_id, outcome))
}
