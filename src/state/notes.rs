//! Notes-page state: the fetched list, the create/update draft, and the
//! summarize in-flight gate.
//!
//! DESIGN
//! ======
//! The list is owned by the mounted notes page and replaced wholesale on
//! every re-fetch; [`apply_summary`] is the one in-place patch, because
//! summaries arrive per note and do not warrant a full reload.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use crate::net::types::Note;

/// Note list state backed by the remote API.
#[derive(Clone, Debug, Default)]
pub struct NotesState {
    pub items: Vec<Note>,
    pub loading: bool,
}

/// Transient input for the combined create/update form.
///
/// `editing_id` doubles as the mode marker: `Some` routes the next submit
/// to update-by-identifier, `None` to create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub editing_id: Option<String>,
}

impl NoteDraft {
    /// Load an existing note into the form for editing.
    pub fn begin_edit(note: &Note) -> Self {
        Self {
            title: note.title.clone().unwrap_or_default(),
            content: note.content.clone(),
            editing_id: Some(note.id.clone()),
        }
    }

    /// Clear the form back to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

/// Coarse in-flight guard for summarize requests.
///
/// One shared flag blocks every summarize control while any single request
/// is outstanding, so summarization calls never overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SummarizeGate {
    in_flight: bool,
}

impl SummarizeGate {
    /// Try to claim the gate. Returns `false` (and leaves the gate claimed
    /// by the earlier request) when one is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the gate once the in-flight request resolves.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn in_flight(self) -> bool {
        self.in_flight
    }
}

/// Patch the summary of the note with `id` in place, leaving every other
/// note untouched. A missing id is a no-op.
pub fn apply_summary(items: &mut [Note], id: &str, summary: &str) {
    for note in items {
        if note.id == id {
            note.summary = Some(summary.to_owned());
        }
    }
}
