use super::*;

#[test]
fn meeting_path_prefixes_separator() {
    assert_eq!(meeting_path("m1"), "/m1");
}

#[test]
fn meeting_path_keeps_identifier_verbatim() {
    let id = "3c6e0b8a-9c15-4ae3-98f6-4d1f4b2c6f11";
    assert_eq!(meeting_path(id), format!("/{id}"));
}
