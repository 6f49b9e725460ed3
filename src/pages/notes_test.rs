use super::*;

#[test]
fn validate_note_input_requires_content() {
    assert_eq!(validate_note_input("Title", ""), None);
    assert_eq!(validate_note_input("Title", "   "), None);
}

#[test]
fn validate_note_input_allows_missing_title() {
    assert_eq!(
        validate_note_input("", "remember the milk"),
        Some((String::new(), "remember the milk".to_owned()))
    );
}

#[test]
fn validate_note_input_trims_title_and_keeps_content_verbatim() {
    assert_eq!(
        validate_note_input("  Groceries  ", "milk\neggs "),
        Some(("Groceries".to_owned(), "milk\neggs ".to_owned()))
    );
}
