//! Signup page supporting email + password and Google OAuth.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::auth::OAuthProvider;
use crate::net::error::AuthError;
use crate::state::auth::AuthState;
use crate::state::signup::SubmitStatus;

/// Pre-network form state for a newly begun attempt: the previous error is
/// cleared and the form enters `Submitting`. `None` while a prior attempt is
/// still in flight.
fn attempt_reset(status: SubmitStatus) -> Option<(SubmitStatus, Option<AuthError>)> {
    if status.is_submitting() {
        return None;
    }
    Some((SubmitStatus::Submitting, None))
}

/// Form state after a failed attempt: the classified error is surfaced and
/// the controls re-enable. Successful attempts navigate away instead.
fn settle_failure(err: AuthError) -> (SubmitStatus, Option<AuthError>) {
    (SubmitStatus::Idle, Some(err))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<AuthError>);
    let status = RwSignal::new(SubmitStatus::Idle);
    let navigate = use_navigate();

    let signup_config = config.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((submitting, cleared)) = attempt_reset(status.get()) else {
            return;
        };
        error.set(cleared);
        status.set(submitting);

        // Credentials go to the provider exactly as entered; format and
        // strength checks are its responsibility.
        let email_value = email.get();
        let password_value = password.get();
        let config = signup_config.clone();
        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::sign_up(&config, &email_value, &password_value).await {
                Ok(session) => {
                    auth.update(|state| state.session = Some(session));
                    navigate(crate::app::CALLBACK_PATH, leptos_router::NavigateOptions::default());
                }
                Err(err) => {
                    let (settled, surfaced) = settle_failure(err);
                    error.set(surfaced);
                    status.set(settled);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value, config, navigate, auth);
        }
    };

    let oauth_config = config;
    let on_google = move |_| {
        let Some((submitting, cleared)) = attempt_reset(status.get()) else {
            return;
        };
        error.set(cleared);
        status.set(submitting);

        // On success the browser is leaving the page; controls stay disabled
        // until teardown.
        if let Err(err) = crate::net::auth::begin_oauth(&oauth_config, OAuthProvider::Google) {
            let (settled, surfaced) = settle_failure(err);
            error.set(surfaced);
            status.set(settled);
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Sign Up"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="signup-card__error">
                        {move || error.get().map(|e| e.display_text()).unwrap_or_default()}
                    </p>
                </Show>
                <form class="signup-form" on:submit=on_create>
                    <label class="signup-field">
                        <span class="signup-field__label">"Email"</span>
                        <input
                            class="signup-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signup-field">
                        <span class="signup-field__label">"Password"</span>
                        <input
                            class="signup-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="signup-button"
                        type="submit"
                        disabled=move || status.get().is_submitting()
                    >
                        "Create Account"
                    </button>
                </form>
                <div class="signup-divider"></div>
                <button
                    class="signup-button"
                    type="button"
                    on:click=on_google
                    disabled=move || status.get().is_submitting()
                >
                    "Sign Up with Google"
                </button>
            </div>
        </div>
    }
}
