use futures::executor::block_on;

use super::*;
use crate::services::contact::BudgetBracket;

fn payload() -> ContactPayload {
    ContactPayload {
        name: "Léa Rochat".into(),
        email: "lea@atelier.ch".into(),
        company: None,
        project: Some("Site vitrine".into()),
        budget: Some(BudgetBracket::From10kTo25k),
        message: "Bonjour, nous aimerions refaire notre site.".into(),
    }
}

fn rejection(result: RelayResult<RelayReceipt>) -> (RelayKind, StatusCode, String) {
    match result {
        Err(RelayError::Rejected {
            relay,
            status,
            message,
        }) => (relay, status, message),
        other => panic!("expected a rejection, got {other:?}"),
    }
}

// =============================================================
// EmailJS
// =============================================================

#[test]
fn emailjs_ok_is_delivered() {
    let receipt = interpret_emailjs(StatusCode::OK, "OK").unwrap();
    assert_eq!(receipt.relay, RelayKind::EmailJs);
}

#[test]
fn emailjs_error_text_becomes_the_message() {
    let (relay, status, message) = rejection(interpret_emailjs(
        StatusCode::BAD_REQUEST,
        "The Public Key is invalid",
    ));
    assert_eq!(relay, RelayKind::EmailJs);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "The Public Key is invalid");
}

// =============================================================
// Formspree
// =============================================================

#[test]
fn formspree_ok_flag_is_delivered() {
    let receipt = interpret_formspree(StatusCode::OK, r#"{"next":"/thanks","ok":true}"#).unwrap();
    assert_eq!(receipt.relay, RelayKind::Formspree);
}

#[test]
fn formspree_errors_are_joined() {
    let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"form not found"}]}"#;
    let (_, status, message) = rejection(interpret_formspree(StatusCode::UNPROCESSABLE_ENTITY, body));
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(message, "should be an email; form not found");
}

#[test]
fn formspree_success_status_without_ok_is_rejected() {
    let (_, _, message) = rejection(interpret_formspree(StatusCode::OK, "{}"));
    assert!(message.starts_with("unexpected response"));
}

#[test]
fn formspree_html_body_is_a_decode_error() {
    let result = interpret_formspree(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert!(matches!(result, Err(RelayError::Decode(_))));
}

// =============================================================
// Web3Forms
// =============================================================

#[test]
fn web3forms_success_keeps_server_message() {
    let receipt = interpret_web3forms(
        StatusCode::OK,
        r#"{"success":true,"message":"Email sent successfully!"}"#,
    )
    .unwrap();
    assert_eq!(receipt.message.as_deref(), Some("Email sent successfully!"));
}

#[test]
fn web3forms_failure_reports_message() {
    let (relay, _, message) = rejection(interpret_web3forms(
        StatusCode::BAD_REQUEST,
        r#"{"success":false,"message":"Invalid access key"}"#,
    ));
    assert_eq!(relay, RelayKind::Web3Forms);
    assert_eq!(message, "Invalid access key");
}

#[test]
fn web3forms_request_flattens_payload_next_to_access_key() {
    let payload = payload();
    let body = serde_json::to_value(Web3FormsRequest {
        access_key: "key-1",
        payload: &payload,
    })
    .unwrap();
    assert_eq!(body["access_key"], "key-1");
    assert_eq!(body["email"], "lea@atelier.ch");
    assert_eq!(body["budget"], "10-25k");
    assert!(body.get("company").is_none());
}

// =============================================================
// Mail relay
// =============================================================

#[test]
fn mail_relay_success() {
    let receipt = interpret_mail_relay(
        StatusCode::OK,
        r#"{"success":true,"message":"Message envoyé avec succès"}"#,
    )
    .unwrap();
    assert_eq!(receipt.relay, RelayKind::MailRelay);
    assert_eq!(receipt.message.as_deref(), Some("Message envoyé avec succès"));
}

#[test]
fn mail_relay_validation_errors() {
    let (_, status, message) = rejection(interpret_mail_relay(
        StatusCode::BAD_REQUEST,
        r#"{"errors":["Le nom est requis","Email invalide"]}"#,
    ));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "Le nom est requis; Email invalide");
}

#[test]
fn mail_relay_delivery_failure_includes_details() {
    let (_, _, message) = rejection(interpret_mail_relay(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Erreur lors de l'envoi du message","details":"Échec de l'envoi de l'email"}"#,
    ));
    assert_eq!(
        message,
        "Erreur lors de l'envoi du message: Échec de l'envoi de l'email"
    );
}

#[test]
fn mail_relay_method_not_allowed() {
    let (_, status, message) = rejection(interpret_mail_relay(
        StatusCode::METHOD_NOT_ALLOWED,
        r#"{"error":"Méthode non autorisée"}"#,
    ));
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(message, "Méthode non autorisée");
}

#[test]
fn mail_relay_ok_without_success_flag_is_rejected() {
    let result = interpret_mail_relay(StatusCode::OK, "");
    let (_, status, _) = rejection(result);
    assert_eq!(status, StatusCode::OK);
}

// =============================================================
// Relay construction
// =============================================================

#[test]
fn simulated_relay_delivers_without_network() {
    let relay = ContactRelay::new(&AppConfig::default()).unwrap();
    assert_eq!(relay.kind(), RelayKind::Simulated);

    let payload = payload();
    let receipt = block_on(relay.deliver(&payload)).unwrap();
    assert_eq!(receipt.relay, RelayKind::Simulated);
}

#[test]
fn relative_endpoint_is_refused() {
    let config = AppConfig {
        relay: RelaySettings::MailRelay {
            url: "/send-email.php".into(),
        },
        ..AppConfig::default()
    };
    assert!(matches!(
        ContactRelay::new(&config),
        Err(RelayError::InvalidEndpoint(url)) if url == "/send-email.php"
    ));
}

#[test]
fn emailjs_request_shape() {
    let payload = payload();
    let body = serde_json::to_value(EmailJsRequest {
        service_id: "service_1",
        template_id: "template_1",
        user_id: "pk_1",
        template_params: &payload,
    })
    .unwrap();
    assert_eq!(body["user_id"], "pk_1");
    assert_eq!(body["template_params"]["name"], "Léa Rochat");
    assert_eq!(body["template_params"]["project"], "Site vitrine");
}
