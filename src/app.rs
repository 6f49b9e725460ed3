//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, notes::NotesPage, signup::SignupPage};
use crate::state::session::SessionState;
use crate::util::token;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, installs the cross-tab storage listener,
/// and sets up client-side routing. Which screen a route renders is decided
/// by the pages themselves through the redirect guards in `util::auth`,
/// re-evaluated whenever the session signal changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Token presence is the sole authentication signal.
    let session = RwSignal::new(SessionState::from_token_presence(token::has_token()));
    provide_context(session);

    // A login or logout in a sibling tab fires the window `storage` event;
    // re-derive the session from token presence so this tab follows.
    token::install_storage_sync(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/notesum.css"/>
        <Title text="AI Notes Summarizer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=NotesPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
