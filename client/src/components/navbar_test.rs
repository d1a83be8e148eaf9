use super::*;
use tourbook::session::Session;

#[test]
fn label_hides_while_resolving() {
    assert_eq!(session_label(&SessionPhase::Authenticating), None);
    assert_eq!(session_label(&SessionPhase::Unauthenticated).as_deref(), Some("Guest"));
}

#[test]
fn label_prefers_display_name() {
    let session = Session {
        uid: "u1".to_owned(),
        email: "ann@example.com".to_owned(),
        display_name: Some("Ann".to_owned()),
        photo_url: None,
        role: None,
        bearer_token: None,
    };
    assert_eq!(session_label(&SessionPhase::Authenticated(session)).as_deref(), Some("Ann"));
}
