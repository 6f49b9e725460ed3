//! Card component for a single note in the list.
//!
//! DESIGN
//! ======
//! All behavior arrives as callbacks from the notes page, and the shared
//! summarize gate arrives as a signal so every card's summarize control
//! disables together while any one request is in flight.

#[cfg(test)]
#[path = "note_card_test.rs"]
mod note_card_test;

use leptos::prelude::*;

use crate::net::types::Note;

/// Title text to render; missing and empty titles are hidden.
fn display_title(note: &Note) -> Option<String> {
    match &note.title {
        Some(title) if !title.is_empty() => Some(title.clone()),
        _ => None,
    }
}

/// Summary text to render once a summarize call has populated it.
fn display_summary(note: &Note) -> Option<String> {
    match &note.summary {
        Some(summary) if !summary.is_empty() => Some(summary.clone()),
        _ => None,
    }
}

/// Label for the summarize control, reflecting the shared in-flight gate.
fn summarize_label(in_flight: bool) -> &'static str {
    if in_flight { "Summarizing..." } else { "Summarize" }
}

/// A note with its summary block and edit/delete/summarize actions.
#[component]
pub fn NoteCard(
    note: Note,
    #[prop(into)] summarize_disabled: Signal<bool>,
    on_edit: Callback<Note>,
    on_delete: Callback<String>,
    on_summarize: Callback<String>,
) -> impl IntoView {
    let title = display_title(&note);
    let summary = display_summary(&note);
    let content = note.content.clone();
    let edit_note = note.clone();
    let delete_id = note.id.clone();
    let summarize_id = note.id;

    view! {
        <article class="note-card">
            {title.map(|title| view! { <h2 class="note-card__title">{title}</h2> })}
            <p class="note-card__content">{content}</p>
            {summary
                .map(|summary| {
                    view! {
                        <section class="note-card__summary">
                            <h3>"Summary:"</h3>
                            <p>{summary}</p>
                        </section>
                    }
                })}
            <div class="note-card__actions">
                <button class="btn" on:click=move |_| on_edit.run(edit_note.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
                <button
                    class="btn btn--primary"
                    disabled=move || summarize_disabled.get()
                    on:click=move |_| on_summarize.run(summarize_id.clone())
                >
                    {move || summarize_label(summarize_disabled.get())}
                </button>
            </div>
        </article>
    }
}
