use super::*;

#[test]
fn validate_username_trims_whitespace() {
    assert_eq!(validate_username("  alice  "), Ok("alice".to_owned()));
}

#[test]
fn validate_username_requires_value() {
    assert_eq!(validate_username(""), Err("Enter a username."));
    assert_eq!(validate_username(" \t "), Err("Enter a username."));
}

#[test]
fn validate_username_keeps_inner_spaces_and_unicode() {
    assert_eq!(validate_username(" Zoë Admin "), Ok("Zoë Admin".to_owned()));
}
