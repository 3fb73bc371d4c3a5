//! Post-auth landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both auth paths end here: credential signup navigates in-app, and the
//! OAuth round-trip redirects back from the provider. Token custody stays
//! with the provider; this page only confirms arrival.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        let state = auth.get();
        match state.session.as_ref().and_then(|s| s.email()) {
            Some(email) => format!("You're signed up as {email}."),
            None => "Your account is ready.".to_owned(),
        }
    };

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Welcome"</h1>
                <p class="signup-card__note">{greeting}</p>
            </div>
        </div>
    }
}
