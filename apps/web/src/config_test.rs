use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = config_from(&[]);
    assert_eq!(config.profile, AppProfile::Dev);
    assert_eq!(config.relay, RelaySettings::Simulated);
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.pipeline_policy, PipelinePolicy::Permissive);
}

#[test]
fn timeout_has_a_one_second_floor() {
    let config = config_from(&[("GLOBINET_REQUEST_TIMEOUT_SECS", "0")]);
    assert_eq!(config.request_timeout, Duration::from_secs(1));

    let garbage = config_from(&[("GLOBINET_REQUEST_TIMEOUT_SECS", "soon")]);
    assert_eq!(garbage.request_timeout, Duration::from_secs(15));
}

#[test]
fn profile_and_policy_are_read() {
    let config = config_from(&[
        ("GLOBINET_PROFILE", "production"),
        ("GLOBINET_PIPELINE_POLICY", "guarded"),
    ]);
    assert!(config.is_production());
    assert_eq!(config.pipeline_policy, PipelinePolicy::Guarded);

    let unknown = config_from(&[("GLOBINET_PIPELINE_POLICY", "strict")]);
    assert_eq!(unknown.pipeline_policy, PipelinePolicy::Permissive);
}

// =============================================================
// Relay selection
// =============================================================

#[test]
fn emailjs_relay_with_full_credentials() {
    let config = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "emailjs"),
        ("GLOBINET_EMAILJS_SERVICE_ID", "service_1"),
        ("GLOBINET_EMAILJS_TEMPLATE_ID", "template_1"),
        ("GLOBINET_EMAILJS_PUBLIC_KEY", "pk_1"),
    ]);
    assert_eq!(
        config.relay,
        RelaySettings::EmailJs {
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "pk_1".into(),
        }
    );
}

#[test]
fn relay_with_missing_credentials_falls_back_to_simulated() {
    let config = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "emailjs"),
        ("GLOBINET_EMAILJS_SERVICE_ID", "service_1"),
    ]);
    assert_eq!(config.relay, RelaySettings::Simulated);

    let blank = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "web3forms"),
        ("GLOBINET_WEB3FORMS_ACCESS_KEY", "   "),
    ]);
    assert_eq!(blank.relay, RelaySettings::Simulated);
}

#[test]
fn unknown_relay_falls_back_to_simulated() {
    let config = config_from(&[("GLOBINET_CONTACT_RELAY", "carrier-pigeon")]);
    assert_eq!(config.relay.kind(), RelayKind::Simulated);
}

#[test]
fn each_relay_kind_reads_its_own_key() {
    let formspree = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "formspree"),
        ("GLOBINET_FORMSPREE_ENDPOINT", "https://formspree.io/f/abc"),
    ]);
    assert_eq!(
        formspree.relay,
        RelaySettings::Formspree {
            endpoint: "https://formspree.io/f/abc".into()
        }
    );

    let web3forms = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "Web3Forms"),
        ("GLOBINET_WEB3FORMS_ACCESS_KEY", "key-1"),
    ]);
    assert_eq!(web3forms.relay.kind(), RelayKind::Web3Forms);

    let mail = config_from(&[
        ("GLOBINET_CONTACT_RELAY", "mail_relay"),
        ("GLOBINET_MAIL_RELAY_URL", "https://globinet.ch/send-email.php"),
    ]);
    assert_eq!(
        mail.relay,
        RelaySettings::MailRelay {
            url: "https://globinet.ch/send-email.php".into()
        }
    );
}

#[test]
fn relay_kind_wire_names_match_config_values() {
    for kind in [
        RelayKind::Simulated,
        RelayKind::EmailJs,
        RelayKind::Formspree,
        RelayKind::Web3Forms,
        RelayKind::MailRelay,
    ] {
        assert_eq!(RelayKind::parse(kind.as_str()), Some(kind));
        assert_eq!(
            serde_json::to_value(kind).unwrap(),
            serde_json::Value::String(kind.as_str().into())
        );
    }
}

#[test]
fn php_script_name_selects_the_mail_relay() {
    assert_eq!(RelayKind::parse("php"), Some(RelayKind::MailRelay));
    assert_eq!(RelayKind::parse(" PHP "), Some(RelayKind::MailRelay));
    assert_eq!(RelayKind::parse(""), Some(RelayKind::Simulated));
    assert_eq!(RelayKind::parse("smtp"), None);
}
