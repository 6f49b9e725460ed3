use super::*;

fn note(title: Option<&str>, summary: Option<&str>) -> Note {
    Note {
        id: "n1".to_owned(),
        title: title.map(str::to_owned),
        content: "body".to_owned(),
        summary: summary.map(str::to_owned),
    }
}

#[test]
fn display_title_hides_missing_and_empty_titles() {
    assert_eq!(display_title(&note(None, None)), None);
    assert_eq!(display_title(&note(Some(""), None)), None);
    assert_eq!(display_title(&note(Some("Groceries"), None)), Some("Groceries".to_owned()));
}

#[test]
fn display_summary_hides_missing_and_empty_summaries() {
    assert_eq!(display_summary(&note(None, None)), None);
    assert_eq!(display_summary(&note(None, Some(""))), None);
    assert_eq!(
        display_summary(&note(None, Some("short summary"))),
        Some("short summary".to_owned())
    );
}

#[test]
fn summarize_label_swaps_while_in_flight() {
    assert_eq!(summarize_label(false), "Summarize");
    assert_eq!(summarize_label(true), "Summarizing...");
}
