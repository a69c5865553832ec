use std::cell::Cell;

use futures::executor::block_on;
use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;
use reqwest::StatusCode;

use super::*;
use crate::api::RelayResult;
use crate::config::RelayKind;

/// Relay double that counts calls and answers with a fixed outcome.
struct StubRelay {
    calls: Cell<usize>,
    fail: bool,
}

impl StubRelay {
    fn succeeding() -> Self {
        Self {
            calls: Cell::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }
}

impl DeliverContact for StubRelay {
    fn kind(&self) -> RelayKind {
        RelayKind::MailRelay
    }

    fn deliver<'a>(
        &'a self,
        _payload: &'a ContactPayload,
    ) -> LocalBoxFuture<'a, RelayResult<RelayReceipt>> {
        self.calls.set(self.calls.get() + 1);
        let outcome = if self.fail {
            Err(RelayError::Rejected {
                relay: RelayKind::MailRelay,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "delivery failed".into(),
            })
        } else {
            Ok(RelayReceipt {
                relay: RelayKind::MailRelay,
                message: Some("Message envoyé avec succès".into()),
            })
        };
        future::ready(outcome).boxed_local()
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(ContactField::Name, "Léa Rochat");
    form.set_field(ContactField::Email, "lea@atelier.ch");
    form.set_field(ContactField::Budget, "25-50k");
    form.set_field(ContactField::Message, "Nous cherchons une agence pour notre refonte.");
    form
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_message_blocks_submission_without_calling_relay() {
    let relay = StubRelay::succeeding();
    let mut form = filled_form();
    form.set_field(ContactField::Message, "   ");

    let result = block_on(submit_contact(&mut form, &relay));

    assert!(matches!(
        result,
        Err(SubmitError::Invalid(ref errors)) if errors == &vec![ValidationError::MessageRequired]
    ));
    assert_eq!(relay.calls.get(), 0);
    assert_eq!(form.phase, SubmissionPhase::Editing);
    assert_eq!(
        form.error_for(ContactField::Message),
        Some(&ValidationError::MessageRequired)
    );
}

#[test]
fn every_missing_field_is_listed() {
    let errors = ContactDraft::default().validate().unwrap_err();
    assert_eq!(
        errors,
        vec![
            ValidationError::NameRequired,
            ValidationError::InvalidEmail,
            ValidationError::MessageRequired,
        ]
    );
    assert_eq!(errors[0].to_string(), "Le nom est requis");
}

#[test]
fn unknown_budget_is_a_field_error() {
    let mut draft = filled_form().draft;
    draft.set(ContactField::Budget, "1M");
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), ContactField::Budget);
}

#[test]
fn editing_a_field_clears_its_error() {
    let relay = StubRelay::succeeding();
    let mut form = ContactForm::default();
    let _ = block_on(submit_contact(&mut form, &relay));
    assert_eq!(form.errors.len(), 3);

    form.set_field(ContactField::Name, "Léa");
    assert!(form.error_for(ContactField::Name).is_none());
    assert_eq!(form.errors.len(), 2);
}

#[test]
fn email_shape_is_checked() {
    assert!(is_valid_email("contact@globinet.ch"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("contact@globinet"));
    assert!(!is_valid_email("@globinet.ch"));
    assert!(!is_valid_email("contact@@globinet.ch"));
    assert!(!is_valid_email("con tact@globinet.ch"));
    assert!(!is_valid_email("contact@globinet..ch"));
    assert!(!is_valid_email(""));
}

#[test]
fn payload_trims_and_drops_blank_optionals() {
    let mut draft = filled_form().draft;
    draft.set(ContactField::Name, "  Léa Rochat ");
    draft.set(ContactField::Company, "   ");
    let payload = draft.validate().unwrap();
    assert_eq!(payload.name, "Léa Rochat");
    assert_eq!(payload.company, None);
    assert_eq!(payload.budget, Some(BudgetBracket::From25kTo50k));

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("company").is_none());
    assert!(json.get("project").is_none());
    assert_eq!(json["budget"], "25-50k");
}

#[test]
fn budget_brackets_use_select_values() {
    let values: Vec<&str> = BudgetBracket::all().iter().map(|b| b.as_str()).collect();
    assert_eq!(values, vec!["<10k", "10-25k", "25-50k", "50-100k", ">100k"]);
    assert_eq!(BudgetBracket::parse(">100k"), Ok(BudgetBracket::Over100k));
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn successful_submission_shows_confirmation_then_clears() {
    let relay = StubRelay::succeeding();
    let mut form = filled_form();

    let receipt = block_on(submit_contact(&mut form, &relay)).unwrap();
    assert_eq!(receipt.relay, RelayKind::MailRelay);
    assert_eq!(relay.calls.get(), 1);
    assert_eq!(form.phase, SubmissionPhase::Sent);
    assert_eq!(form.draft.name, "Léa Rochat");

    let id = form.submission_id().expect("submission id assigned");
    assert!(form.finish_confirmation(id));
    assert_eq!(form.phase, SubmissionPhase::Editing);
    assert_eq!(form.draft, ContactDraft::default());
}

#[test]
fn failing_relay_keeps_fields_and_shows_error() {
    let relay = StubRelay::failing();
    let mut form = filled_form();
    let before = form.draft.clone();

    let result = block_on(submit_contact(&mut form, &relay));

    assert!(matches!(result, Err(SubmitError::Relay { .. })));
    assert!(matches!(form.phase, SubmissionPhase::Failed(_)));
    assert_eq!(form.draft, before);
    assert_eq!(relay.calls.get(), 1);

    form.dismiss_failure();
    assert_eq!(form.phase, SubmissionPhase::Editing);
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = filled_form();
    let pending = form.begin_submit().unwrap();
    assert!(form.is_submitting());

    assert!(matches!(form.begin_submit(), Err(SubmitError::InFlight)));
    assert_eq!(form.submission_id(), Some(pending.submission_id));
}

#[test]
fn stale_confirmation_reset_is_ignored() {
    let relay = StubRelay::succeeding();
    let mut form = filled_form();
    block_on(submit_contact(&mut form, &relay)).unwrap();

    assert!(!form.finish_confirmation(uuid::Uuid::new_v4()));
    assert_eq!(form.phase, SubmissionPhase::Sent);
}

#[test]
fn confirmation_lasts_three_seconds() {
    assert_eq!(CONFIRMATION_DISPLAY.as_millis(), 3_000);
}

#[test]
fn late_outcome_of_a_replaced_submission_leaves_the_form_alone() {
    let relay = StubRelay::succeeding();
    let mut form = filled_form();
    block_on(submit_contact(&mut form, &relay)).unwrap();

    let late = form.complete(
        uuid::Uuid::new_v4(),
        Err(RelayError::InvalidEndpoint("https://relay.invalid".into())),
    );

    assert!(matches!(late, Err(SubmitError::Stale(_))));
    assert_eq!(form.phase, SubmissionPhase::Sent);
}

#[test]
fn repeated_outcome_for_a_finished_submission_is_ignored() {
    let mut form = filled_form();
    let pending = form.begin_submit().unwrap();
    let receipt = RelayReceipt {
        relay: RelayKind::MailRelay,
        message: None,
    };
    assert!(form.complete(pending.submission_id, Ok(receipt)).is_ok());

    let again = form.complete(
        pending.submission_id,
        Err(RelayError::InvalidEndpoint("https://relay.invalid".into())),
    );
    assert!(matches!(again, Err(SubmitError::Stale(id)) if id == pending.submission_id));
    assert_eq!(form.phase, SubmissionPhase::Sent);
}

/// Form holder that counts how often the flow reaches into it.
struct CountingSlot {
    form: ContactForm,
    borrows: usize,
}

impl ContactSlot for CountingSlot {
    fn with_form<R>(&mut self, apply: impl FnOnce(&mut ContactForm) -> R) -> R {
        self.borrows += 1;
        apply(&mut self.form)
    }
}

#[test]
fn flow_touches_the_form_before_and_after_delivery_only() {
    let relay = StubRelay::failing();
    let mut slot = CountingSlot {
        form: filled_form(),
        borrows: 0,
    };

    let result = block_on(submit_contact(&mut slot, &relay));

    assert!(matches!(result, Err(SubmitError::Relay { .. })));
    assert_eq!(slot.borrows, 2);
    assert!(matches!(slot.form.phase, SubmissionPhase::Failed(_)));
    assert_eq!(slot.form.draft.name, "Léa Rochat");
}

#[test]
fn invalid_form_never_reaches_the_relay_through_a_slot() {
    let relay = StubRelay::succeeding();
    let mut slot = CountingSlot {
        form: ContactForm::default(),
        borrows: 0,
    };

    let result = block_on(submit_contact(&mut slot, &relay));

    assert!(matches!(result, Err(SubmitError::Invalid(_))));
    assert_eq!(slot.borrows, 1);
    assert_eq!(relay.calls.get(), 0);
}
