use super::*;

fn note(id: &str, title: Option<&str>, content: &str) -> Note {
    Note {
        id: id.to_owned(),
        title: title.map(str::to_owned),
        content: content.to_owned(),
        summary: None,
    }
}

#[test]
fn notes_state_defaults() {
    let s = NotesState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
}

#[test]
fn draft_begin_edit_fills_fields_and_marks_target() {
    let draft = NoteDraft::begin_edit(&note("n1", Some("Groceries"), "milk, eggs"));
    assert_eq!(draft.title, "Groceries");
    assert_eq!(draft.content, "milk, eggs");
    assert_eq!(draft.editing_id.as_deref(), Some("n1"));
    assert!(draft.is_editing());
}

#[test]
fn draft_begin_edit_with_missing_title_uses_empty_string() {
    let draft = NoteDraft::begin_edit(&note("n2", None, "body"));
    assert_eq!(draft.title, "");
}

#[test]
fn draft_reset_clears_fields_and_editing_marker() {
    let mut draft = NoteDraft::begin_edit(&note("n1", Some("t"), "c"));
    draft.reset();
    assert_eq!(draft, NoteDraft::default());
    assert!(!draft.is_editing());
}

#[test]
fn summarize_gate_rejects_second_claim_until_finished() {
    let mut gate = SummarizeGate::default();
    assert!(gate.try_begin());
    assert!(gate.in_flight());
    // A second summarize while the first is in flight is rejected.
    assert!(!gate.try_begin());
    gate.finish();
    assert!(!gate.in_flight());
    assert!(gate.try_begin());
}

#[test]
fn apply_summary_patches_only_the_matching_note() {
    let mut items = vec![note("n1", None, "a"), note("n2", None, "b")];
    apply_summary(&mut items, "n1", "short summary");
    assert_eq!(items[0].summary.as_deref(), Some("short summary"));
    assert_eq!(items[1].summary, None);
    assert_eq!(items[1].content, "b");
}

#[test]
fn apply_summary_with_unknown_id_changes_nothing() {
    let mut items = vec![note("n1", None, "a")];
    apply_summary(&mut items, "nope", "s");
    assert_eq!(items[0].summary, None);
}
