use super::*;

#[test]
fn validate_registration_input_accepts_complete_form() {
    let reg = validate_registration_input(" neo ", " neo@matrix.io ", "pass", "pass").unwrap();
    assert_eq!(reg.username, "neo");
    assert_eq!(reg.email, "neo@matrix.io");
    assert_eq!(reg.password1, "pass");
    assert_eq!(reg.password2, "pass");
}

#[test]
fn validate_registration_input_requires_every_field() {
    assert_eq!(validate_registration_input("", "e@x.io", "a", "a"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration_input("neo", " ", "a", "a"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration_input("neo", "e@x.io", "", "a"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration_input("neo", "e@x.io", "a", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_registration_input_leaves_mismatch_to_server() {
    assert!(validate_registration_input("neo", "e@x.io", "one", "two").is_ok());
}
