use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ops@example.com ", "pw"),
        Ok(LoginRequest { email: "ops@example.com".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("a@b.com", " pw ").unwrap();
    assert_eq!(request.password, " pw ");
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ops.example.com", "pw"), Err("Enter a valid email address."));
}

#[test]
fn looks_like_email_shapes() {
    assert!(looks_like_email("a@b"));
    assert!(!looks_like_email("@b"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email("a@b@c"));
}
