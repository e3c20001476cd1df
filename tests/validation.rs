use formgrid::validation::{ValidationResult, Validator};
use regex::Regex;

#[test]
fn test_all_fields_pass() {
    let result = Validator::new()
        .field("email", "user@example.com")
        .required("Email is required")
        .email("Invalid email address")
        .field("password", "hunter22")
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .validate();

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_first_failing_rule_wins() {
    let result = Validator::new()
        .field("password", "")
        .required("Password is required")
        .min_length(8, "Password must be at least 8 characters")
        .validate();

    // Empty also fails min_length, but only the first failure is reported.
    assert_eq!(
        result.message_for("password"),
        Some("Password is required")
    );
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn test_errors_collected_across_fields() {
    let result = Validator::new()
        .field("email", "not-an-email")
        .email("Invalid email address")
        .field("password", "short")
        .min_length(8, "Password must be at least 8 characters")
        .validate();

    assert!(result.is_invalid());
    assert_eq!(result.errors().len(), 2);
    assert_eq!(result.message_for("email"), Some("Invalid email address"));
    assert_eq!(
        result.message_for("password"),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(result.first_error().unwrap().field_name, "email");
}

#[test]
fn test_required_rejects_whitespace() {
    let result = Validator::new()
        .field("name", "   ")
        .required("Name is required")
        .validate();

    assert_eq!(result.message_for("name"), Some("Name is required"));
}

#[test]
fn test_length_rules_count_chars_not_bytes() {
    let result = Validator::new()
        .field("name", "héllo")
        .min_length(5, "too short")
        .max_length(5, "too long")
        .validate();

    assert!(result.is_valid());
}

#[test]
fn test_pattern_rule() {
    let digits = Regex::new(r"^\d+$").unwrap();

    let ok = Validator::new()
        .field("pin", "1234")
        .pattern(&digits, "Digits only")
        .validate();
    assert!(ok.is_valid());

    let bad = Validator::new()
        .field("pin", "12a4")
        .pattern(&digits, "Digits only")
        .validate();
    assert_eq!(bad.message_for("pin"), Some("Digits only"));
}

#[test]
fn test_message_for_unknown_field_is_none() {
    let result = Validator::new()
        .field("email", "")
        .required("Email is required")
        .validate();

    assert!(result.message_for("password").is_none());
}

#[test]
fn test_empty_validator_is_valid() {
    assert_eq!(Validator::new().validate(), ValidationResult::Valid);
}
