//! Notes page: list, combined create/update form, delete with confirmation,
//! and per-note AI summarize.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the note inventory
//! once on mount and re-fetches the full list after every mutation instead
//! of patching locally — summaries are the one exception, patched in place.
//! A 401 on the list fetch is the only place server-side token invalidation
//! is detected; it clears the credential and lets the route guard bounce to
//! login.
//!
//! TRADE-OFFS
//! ==========
//! Operation failures here are logged to the console only, unlike the auth
//! pages which surface them inline. Requests carry no timeout and are never
//! cancelled on unmount; each runs to completion independently.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::note_card::NoteCard;
use crate::net::types::Note;
use crate::state::notes::{NoteDraft, NotesState, SummarizeGate};
use crate::state::session::SessionState;
use crate::util;

/// The form accepts an optional title but requires non-blank content.
fn validate_note_input(title: &str, content: &str) -> Option<(String, String)> {
    if content.trim().is_empty() {
        return None;
    }
    Some((title.trim().to_owned(), content.to_owned()))
}

/// Notes page component.
///
/// Redirects to `/login` whenever the session loses its credential, whether
/// through logout, a 401 on the list fetch, or a sibling-tab logout.
#[component]
pub fn NotesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    util::auth::install_unauth_redirect(session, navigate);

    let notes = RwSignal::new(NotesState::default());
    let draft = RwSignal::new(NoteDraft::default());
    let gate = RwSignal::new(SummarizeGate::default());
    let delete_target = RwSignal::new(None::<String>);

    // Initial fetch, once, after mount.
    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if fetched.get() || !session.get().authenticated {
            return;
        }
        fetched.set(true);
        notes.update(|s| s.loading = true);
        refresh_notes(notes, session);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get();
        let Some((title, content)) = validate_note_input(&current.title, &current.content) else {
            return;
        };
        let editing_id = current.editing_id;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = crate::net::types::NotePayload { title, content };
            let result = match editing_id {
                Some(id) => crate::net::api::update_note(&id, &payload).await.map(|_| ()),
                None => crate::net::api::create_note(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    draft.update(NoteDraft::reset);
                    refresh_notes(notes, session);
                }
                Err(error) => log::error!("failed to save note: {error}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (title, content, editing_id);
        }
    };

    let on_edit = Callback::new(move |note: Note| draft.set(NoteDraft::begin_edit(&note)));
    let on_cancel_edit = move |_| draft.update(NoteDraft::reset);

    let on_delete_request = Callback::new(move |id: String| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let on_summarize = Callback::new(move |id: String| {
        let mut claimed = false;
        gate.update(|g| claimed = g.try_begin());
        if !claimed {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::summarize_note(&id).await {
                Ok(response) => {
                    notes.update(|s| {
                        crate::state::notes::apply_summary(&mut s.items, &id, &response.summary);
                    });
                }
                Err(error) => log::error!("failed to summarize note {id}: {error}"),
            }
            gate.update(SummarizeGate::finish);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            gate.update(SummarizeGate::finish);
        }
    });

    let on_logout = move |_| {
        util::token::clear_token();
        // The unauth-route guard observes this flip and navigates to login.
        session.set(SessionState::from_token_presence(false));
    };

    let summarize_disabled = Signal::derive(move || gate.get().in_flight());

    view! {
        <div class="notes-page">
            <div class="notes-page__panel">
                <header class="notes-page__header">
                    <h1>"My Notes"</h1>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Logout"
                    </button>
                </header>

                <form class="note-form" on:submit=on_submit>
                    <input
                        class="note-form__title"
                        type="text"
                        placeholder="Title (optional)"
                        prop:value=move || draft.get().title
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <textarea
                        class="note-form__content"
                        placeholder="Write your note here..."
                        required=true
                        prop:value=move || draft.get().content
                        on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary note-form__submit" type="submit">
                        {move || if draft.get().is_editing() { "Update Note" } else { "Add Note" }}
                    </button>
                    <Show when=move || draft.get().is_editing()>
                        <button class="btn note-form__cancel" type="button" on:click=on_cancel_edit>
                            "Cancel"
                        </button>
                    </Show>
                </form>

                <Show
                    when=move || !notes.get().loading
                    fallback=move || view! { <p class="note-list__loading">"Loading notes..."</p> }
                >
                    <div class="note-list">
                        <Show when=move || notes.get().items.is_empty()>
                            <p class="note-list__empty">"No notes yet."</p>
                        </Show>
                        {move || {
                            notes
                                .get()
                                .items
                                .into_iter()
                                .map(|note| {
                                    view! {
                                        <NoteCard
                                            note=note
                                            summarize_disabled=summarize_disabled
                                            on_edit=on_edit
                                            on_delete=on_delete_request
                                            on_summarize=on_summarize
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    <DeleteNoteDialog
                        note_id=delete_target
                        on_cancel=on_delete_cancel
                        notes=notes
                        session=session
                    />
                </Show>
            </div>
        </div>
    }
}

/// Confirmation dialog gating every note deletion. Declining leaves the
/// list untouched; no network call is made until the user confirms.
#[component]
fn DeleteNoteDialog(
    note_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    notes: RwSignal<NotesState>,
    session: RwSignal<SessionState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = note_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_note(&id).await {
                Ok(()) => refresh_notes(notes, session),
                Err(error) => log::error!("failed to delete note {id}: {error}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, notes, session);
        }
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Note"</h2>
                <p class="dialog__danger">"Are you sure you want to delete this note?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Fetch the full list, replacing local state wholesale. A 401 clears the
/// token and flips the session; the route guard handles the redirect.
fn refresh_notes(notes: RwSignal<NotesState>, session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_notes().await {
            Ok(items) => {
                notes.set(NotesState {
                    items,
                    loading: false,
                });
            }
            Err(crate::net::api::ApiError::Unauthorized) => {
                util::token::clear_token();
                session.set(SessionState::from_token_presence(false));
            }
            Err(error) => {
                log::error!("failed to fetch notes: {error}");
                notes.update(|s| s.loading = false);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notes, session);
    }
}
