use super::*;

#[test]
fn note_deserializes_mongo_style_id() {
    let note: Note = serde_json::from_str(
        r#"{"_id":"n1","title":"Groceries","content":"milk","summary":null}"#,
    )
    .expect("note should parse");
    assert_eq!(note.id, "n1");
    assert_eq!(note.title.as_deref(), Some("Groceries"));
    assert_eq!(note.summary, None);
}

#[test]
fn note_deserializes_plain_id_and_missing_optionals() {
    let note: Note = serde_json::from_str(r#"{"id":"n2","content":"body"}"#).expect("note should parse");
    assert_eq!(note.id, "n2");
    assert_eq!(note.title, None);
    assert_eq!(note.summary, None);
}

#[test]
fn note_list_parses() {
    let notes: Vec<Note> =
        serde_json::from_str(r#"[{"_id":"a","content":"1"},{"_id":"b","content":"2","summary":"s"}]"#)
            .expect("list should parse");
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[1].summary.as_deref(), Some("s"));
}

#[test]
fn login_response_token_is_optional() {
    let with: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).expect("should parse");
    assert_eq!(with.token.as_deref(), Some("abc123"));

    let without: LoginResponse = serde_json::from_str(r"{}").expect("should parse");
    assert_eq!(without.token, None);
}

#[test]
fn summarize_response_requires_summary() {
    let parsed: SummarizeResponse =
        serde_json::from_str(r#"{"summary":"short summary"}"#).expect("should parse");
    assert_eq!(parsed.summary, "short summary");
    assert!(serde_json::from_str::<SummarizeResponse>(r"{}").is_err());
}

#[test]
fn error_body_message_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).expect("should parse");
    assert_eq!(with.message.as_deref(), Some("Invalid credentials"));

    let without: ErrorBody = serde_json::from_str(r"{}").expect("should parse");
    assert_eq!(without.message, None);
}

#[test]
fn note_payload_serializes_title_and_content() {
    let payload = NotePayload {
        title: "t".to_owned(),
        content: "c".to_owned(),
    };
    let json = serde_json::to_value(&payload).expect("should serialize");
    assert_eq!(json, serde_json::json!({"title": "t", "content": "c"}));
}
