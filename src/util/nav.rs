//! Full-page browser navigation.
//!
//! In-app route changes go through `leptos_router`; this helper is for
//! leaving the app entirely (the OAuth hand-off). Requires a browser
//! environment; native builds always error.

/// The browser refused or cannot perform a location change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("browser rejected the redirect")]
pub struct RedirectError;

/// Point `window.location` at `url`, abandoning the current page.
///
/// # Errors
///
/// Returns [`RedirectError`] when no window is available or the browser
/// rejects the assignment.
pub fn redirect(url: &str) -> Result<(), RedirectError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(RedirectError)?;
        window.location().set_href(url).map_err(|_| RedirectError)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(RedirectError)
    }
}
