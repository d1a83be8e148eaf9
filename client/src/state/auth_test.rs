use super::*;
use tourbook::role::Role;

fn signed_in(role: Option<Role>) -> AuthState {
    AuthState {
        phase: SessionPhase::Authenticated(Session {
            uid: "u1".to_owned(),
            email: "ann@example.com".to_owned(),
            display_name: Some("Ann".to_owned()),
            photo_url: None,
            role,
            bearer_token: Some("jwt".to_owned()),
        }),
        return_to: None,
    }
}

#[test]
fn default_state_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.session().is_none());
}

#[test]
fn after_login_returns_to_guarded_location() {
    let state = AuthState { return_to: Some("/payment/b1".to_owned()), ..AuthState::default() };
    assert_eq!(state.after_login(), "/payment/b1");
}

#[test]
fn after_login_never_loops_back_to_login() {
    let state = AuthState { return_to: Some("/login".to_owned()), ..AuthState::default() };
    assert_eq!(state.after_login(), "/");
    assert_eq!(AuthState::default().after_login(), "/");
}

#[test]
fn dashboard_href_follows_role() {
    assert_eq!(signed_in(Some(Role::TourGuide)).dashboard_href(), Some(Role::TourGuide.dashboard_path()));
    assert_eq!(signed_in(None).dashboard_href(), None);
    assert_eq!(AuthState::default().dashboard_href(), None);
}
