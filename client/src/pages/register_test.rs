use super::*;

#[test]
fn blank_photo_is_dropped() {
    let form = sign_up_form(" Ann ", "a@b.com", "Abcdef1", "  ").unwrap();
    assert_eq!(form.name, "Ann");
    assert_eq!(form.photo_url, None);
}

#[test]
fn weak_password_is_refused_before_submit() {
    assert_eq!(sign_up_form("Ann", "a@b.com", "abcdef1", ""), Err(PolicyError::WeakPassword));
    assert_eq!(sign_up_form("Ann", "a@b.com", "Ab1", ""), Err(PolicyError::WeakPassword));
}

#[test]
fn missing_name_is_reported_first() {
    assert!(matches!(sign_up_form("", "", "", ""), Err(PolicyError::MissingField(_))));
}
