use super::*;

#[test]
fn credentials_trim_email_but_not_password() {
    assert_eq!(
        credentials("  ann@example.com ", " Secret1 "),
        Ok(("ann@example.com".to_owned(), " Secret1 ".to_owned()))
    );
}

#[test]
fn credentials_name_the_blank_field() {
    assert_eq!(credentials("   ", "Secret1"), Err("Enter your email."));
    assert_eq!(credentials("ann@example.com", ""), Err("Enter your password."));
}
