//! Startup screen shown when build configuration fails validation.

use leptos::prelude::*;

/// Replaces the whole app when a deployment value is missing or malformed.
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Configuration Error"</h1>
                <p class="signup-card__error">{message}</p>
                <p class="signup-card__note">
                    "Signup is unavailable until this deployment's settings are fixed."
                </p>
            </div>
        </div>
    }
}
