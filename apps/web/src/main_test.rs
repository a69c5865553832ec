use super::*;

#[test]
fn crm_screens_live_under_the_crm_prefix() {
    assert_eq!("/crm".parse::<Route>().ok(), Some(Route::CrmDashboard {}));
    assert_eq!("/crm/pipeline".parse::<Route>().ok(), Some(Route::Pipeline {}));
    assert_eq!(Route::Settings {}.to_string(), "/crm/settings");
}

#[test]
fn legal_pages_keep_their_french_paths() {
    assert_eq!(Route::LegalNotice {}.to_string(), "/mentions-legales");
    assert_eq!(Route::PrivacyPolicy {}.to_string(), "/politique-confidentialite");
    assert_eq!("/cgv".parse::<Route>().ok(), Some(Route::TermsOfSale {}));
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(
        "/portfolio/ancien".parse::<Route>().ok(),
        Some(Route::NotFound {
            segments: vec!["portfolio".into(), "ancien".into()],
        })
    );
}
