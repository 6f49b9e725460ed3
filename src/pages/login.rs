//! Login page with username + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login is the only producer of the access token: on success the token is
//! persisted and the session signal flips, which the auth-route guard picks
//! up to route into the notes view. A 2xx response without a token field is
//! treated as a failed login and persists nothing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util;

/// Message shown when a 2xx login response carries no token.
#[cfg(any(test, feature = "hydrate"))]
const NO_TOKEN_MESSAGE: &str = "Login failed: No token received";

/// Validate the login form, trimming the username.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Map a login API error to the banner message, preferring the
/// server-provided text.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(error: &crate::net::api::ApiError) -> String {
    match error {
        crate::net::api::ApiError::Message(message) => message.clone(),
        _ => "Login failed".to_owned(),
    }
}

/// Login page component.
///
/// Redirects to the notes view when the session is already authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    util::auth::install_auth_redirect(session, navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(response) => match response.token {
                    Some(token) => {
                        util::token::save_token(&token);
                        // The auth-route guard observes this flip and
                        // navigates to the notes view.
                        session.set(SessionState::from_token_presence(true));
                    }
                    None => {
                        error.set(NO_TOKEN_MESSAGE.to_owned());
                        busy.set(false);
                    }
                },
                Err(api_error) => {
                    error.set(login_error_message(&api_error));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"AI Notes Summarizer"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        class="auth-form__input"
                        type="text"
                        required=true
                        autofocus=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="auth-form__label" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        class="auth-form__input"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-message auth-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="auth-form__button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Don't have an account? "
                    <a class="auth-footer__link" href="/signup">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
