//! Provider error classification.
//!
//! ERROR HANDLING
//! ==============
//! The provider's error channel is an untyped message plus an optional
//! machine code. Everything is mapped into a closed [`AuthErrorKind`] set at
//! this boundary; the UI renders a fixed string per kind while the raw
//! provider message stays on the error value for logging.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Closed set of failure categories the UI distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The provider rejected the supplied credentials.
    InvalidCredentials,
    /// The request never produced a provider response.
    NetworkFailure,
    /// The provider is throttling this client.
    RateLimited,
    /// Anything the other kinds do not cover.
    Unknown,
}

impl AuthErrorKind {
    /// Fixed display string rendered in the error region.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid login credentials",
            Self::NetworkFailure => "Network error. Check your connection and try again.",
            Self::RateLimited => "Too many attempts. Wait a moment and try again.",
            Self::Unknown => "Sign-up failed. Please try again.",
        }
    }
}

/// A classified auth failure. `message` preserves the provider's own text
/// for logs; rendering goes through [`AuthError::display_text`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    /// Transport-level failure with no provider response.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::NetworkFailure,
            message: message.into(),
        }
    }

    /// Unclassifiable failure.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Unknown,
            message: message.into(),
        }
    }

    /// Fixed display string for the error region.
    pub fn display_text(&self) -> &'static str {
        self.kind.display_text()
    }
}

/// Wire shape of a provider error body. Field names differ between current
/// (`error_code` + `msg`) and legacy (`error` + `error_description`)
/// responses, so every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ErrorBody {
    fn best_message(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .or(self.error.as_deref())
    }
}

const RATE_LIMIT_CODES: &[&str] = &[
    "over_request_rate_limit",
    "over_email_send_rate_limit",
    "over_sms_send_rate_limit",
];

const INVALID_CREDENTIAL_CODES: &[&str] = &[
    "invalid_credentials",
    "validation_failed",
    "weak_password",
    "email_address_invalid",
];

/// Map a non-2xx provider response to an [`AuthError`].
///
/// Machine codes win over the HTTP status, which wins over message text.
pub fn classify(status: u16, body: &ErrorBody) -> AuthError {
    let message = body.best_message().unwrap_or("sign-up failed").to_owned();
    let kind = match body.error_code.as_deref() {
        Some(code) if RATE_LIMIT_CODES.contains(&code) => AuthErrorKind::RateLimited,
        Some(code) if INVALID_CREDENTIAL_CODES.contains(&code) => AuthErrorKind::InvalidCredentials,
        Some(_) => AuthErrorKind::Unknown,
        None if status == 429 => AuthErrorKind::RateLimited,
        None => kind_from_message(&message),
    };
    AuthError { kind, message }
}

/// Legacy bodies carry no machine code; fall back to message heuristics.
fn kind_from_message(message: &str) -> AuthErrorKind {
    let lower = message.to_ascii_lowercase();
    if lower.contains("rate limit") {
        return AuthErrorKind::RateLimited;
    }
    if lower.contains("invalid")
        && (lower.contains("credential") || lower.contains("password") || lower.contains("email"))
    {
        return AuthErrorKind::InvalidCredentials;
    }
    AuthErrorKind::Unknown
}
