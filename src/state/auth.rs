//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated by the credential signup path so the post-auth landing route
//! can render identity-aware copy. The OAuth path never touches it; that
//! flow re-enters the app from the provider redirect instead.

use crate::net::types::Session;

/// Authentication state for the current render tree.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}
