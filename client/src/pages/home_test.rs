use super::*;

#[test]
fn validate_create_input_trims_both_names() {
    assert_eq!(
        validate_create_input("  Standup  ", " Alice "),
        Ok(("Standup".to_owned(), "Alice".to_owned()))
    );
}

#[test]
fn validate_create_input_rejects_empty_meeting_name() {
    assert_eq!(
        validate_create_input("   ", "Alice"),
        Err("Meeting name and member name are required.")
    );
}

#[test]
fn validate_create_input_rejects_empty_member_name() {
    assert_eq!(
        validate_create_input("Standup", ""),
        Err("Meeting name and member name are required.")
    );
}

#[test]
fn validate_create_input_rejects_both_empty() {
    assert!(validate_create_input("", "").is_err());
}
