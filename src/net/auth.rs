//! REST calls and OAuth hand-off against the identity provider.
//!
//! Client-side (csr): real HTTP via `gloo-net` plus `window.location`
//! redirects. Native builds get stubs that error, since these operations are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a classified [`AuthError`]; nothing here
//! panics or propagates past the page handlers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::app::CALLBACK_PATH;
use crate::config::AppConfig;

use super::error::AuthError;
use super::types::Session;

#[cfg(feature = "csr")]
use super::error::{ErrorBody, classify};

/// OAuth providers this page can hand off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Provider slug as the authorize endpoint expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(auth_url: &str) -> String {
    format!("{auth_url}/auth/v1/signup")
}

#[cfg(any(test, feature = "csr"))]
fn signup_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Absolute URL the provider sends the browser back to after consent.
pub fn oauth_redirect_target(config: &AppConfig) -> String {
    format!("{}{CALLBACK_PATH}", config.redirect_base)
}

/// Compose the provider's OAuth initiation URL with a URL-encoded
/// `redirect_to` pointing at the post-auth callback route.
pub fn authorize_url(config: &AppConfig, provider: OAuthProvider) -> String {
    let redirect: String =
        url::form_urlencoded::byte_serialize(oauth_redirect_target(config).as_bytes()).collect();
    format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={redirect}",
        config.auth_url,
        provider.as_str()
    )
}

/// Create an account with email and password via `POST /auth/v1/signup`.
///
/// The credentials are forwarded exactly as entered; format and strength
/// checks are the provider's responsibility.
///
/// # Errors
///
/// Returns a classified [`AuthError`] on transport failure or any non-2xx
/// provider response.
pub async fn sign_up(config: &AppConfig, email: &str, password: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&signup_endpoint(&config.auth_url))
            .header("apikey", &config.anon_key)
            .header("Authorization", &format!("Bearer {}", config.anon_key))
            .json(&signup_payload(email, password))
            .map_err(|e| AuthError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            let err = classify(resp.status(), &body);
            log::warn!("signup rejected: status={} kind={:?}", resp.status(), err.kind);
            return Err(err);
        }
        resp.json::<Session>()
            .await
            .map_err(|e| AuthError::unknown(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err(AuthError::unknown("not available outside the browser"))
    }
}

/// Start the OAuth consent flow by sending the browser to the provider.
///
/// On success control leaves the app entirely; the user comes back through
/// the callback route once the provider round-trip completes.
///
/// # Errors
///
/// Returns an [`AuthError`] if the browser rejects the location change.
pub fn begin_oauth(config: &AppConfig, provider: OAuthProvider) -> Result<(), AuthError> {
    let target = authorize_url(config, provider);
    #[cfg(feature = "csr")]
    log::info!("starting {} oauth hand-off", provider.as_str());
    crate::util::nav::redirect(&target).map_err(|e| AuthError::unknown(e.to_string()))
}
