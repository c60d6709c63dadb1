use super::*;

#[test]
fn validate_join_input_trims_and_requires_value() {
    assert_eq!(validate_join_input("  Alice  "), Ok("Alice".to_owned()));
    assert_eq!(validate_join_input("   "), Err("Member name is required."));
    assert_eq!(validate_join_input(""), Err("Member name is required."));
}
