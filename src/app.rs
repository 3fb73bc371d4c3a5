//! Application shell: route table and shared context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::pages::auth_callback::AuthCallbackPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;

/// Fixed in-app path the user lands on after any successful auth path.
/// Must stay in sync with the `/auth-callback` route below.
pub const CALLBACK_PATH: &str = "/auth-callback";

/// Root component: installs context and mounts the router.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Title text="Sign Up"/>
        <Router>
            <Routes fallback=|| view! { <Redirect path="/signup"/> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/signup"/> }/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/auth-callback") view=AuthCallbackPage/>
            </Routes>
        </Router>
    }
}
