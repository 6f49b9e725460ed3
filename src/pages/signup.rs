//! Signup page with username + password registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registration never logs the user in: on success the form clears, a
//! confirmation message shows, and after a fixed delay the browser moves to
//! the login view so the user signs in explicitly.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util;

/// Confirmation shown after a successful registration.
#[cfg(any(test, feature = "hydrate"))]
const SUCCESS_MESSAGE: &str = "Registration successful! Please login.";

/// How long the confirmation stays on screen before moving to login.
#[cfg(any(test, feature = "hydrate"))]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Validate the signup form, trimming the username.
fn validate_signup_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Map a registration API error to the banner message.
#[cfg(any(test, feature = "hydrate"))]
fn signup_error_message(error: &crate::net::api::ApiError) -> String {
    match error {
        crate::net::api::ApiError::Message(message) => message.clone(),
        _ => "Registration failed".to_owned(),
    }
}

/// Signup page component.
///
/// Redirects to the notes view when the session is already authenticated.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    util::auth::install_auth_redirect(session, navigate);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        success.set(String::new());
        let (username_value, password_value) =
            match validate_signup_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&username_value, &password_value).await {
                Ok(()) => {
                    success.set(SUCCESS_MESSAGE.to_owned());
                    username.set(String::new());
                    password.set(String::new());
                    // Button stays disabled through the pause; no resubmit.
                    gloo_timers::future::sleep(REDIRECT_DELAY).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(api_error) => {
                    error.set(signup_error_message(&api_error));
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
                <h1>"Sign Up"</h1>
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
                    <Show when=move || !success.get().is_empty()>
                        <p class="auth-message auth-message--success">{move || success.get()}</p>
                    </Show>
                    <button class="auth-form__button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Already have an account? "
                    <a class="auth-footer__link" href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
