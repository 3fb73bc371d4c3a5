//! Wire-schema DTOs for the provider's auth endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the GoTrue-style response payloads so serde does the
//! shape dispatch and page code never inspects raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful signup payload.
///
/// With email autoconfirm enabled the provider answers with a full token
/// grant; with confirmation required it answers with only the pending user
/// record. Both count as success for the signup flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Session {
    /// Immediate token grant with the authenticated user attached.
    Grant {
        access_token: String,
        token_type: String,
        expires_in: i64,
        refresh_token: String,
        user: AuthUser,
    },
    /// Signup accepted; the user still has to confirm their email.
    Pending(AuthUser),
}

impl Session {
    /// Email address the provider recorded for this signup, if any.
    pub fn email(&self) -> Option<&str> {
        let user = match self {
            Self::Grant { user, .. } => user,
            Self::Pending(user) => user,
        };
        user.email.as_deref()
    }
}

/// A user record as returned by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Email address, if the account has one.
    pub email: Option<String>,
    /// ISO 8601 timestamp of email confirmation, absent while pending.
    #[serde(default)]
    pub confirmed_at: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}
