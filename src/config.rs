//! Build-time deployment configuration.
//!
//! DESIGN
//! ======
//! The three public values (provider URL, public API key, OAuth redirect
//! base) are inlined at compile time via `option_env!`, the CSR equivalent
//! of build-time public environment variables. Shape is checked once before
//! mount so a bad deployment fails fast instead of composing a malformed
//! redirect at click time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use url::Url;

/// Validated application configuration, provided via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Identity provider base URL, normalized without a trailing slash.
    pub auth_url: String,
    /// Provider public (anon) API key sent with every auth request.
    pub anon_key: String,
    /// Base URL of this deployment, used to build the OAuth redirect
    /// target. Normalized without a trailing slash.
    pub redirect_base: String,
}

/// A rejected configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{0} is empty")]
    Empty(&'static str),
    #[error("{name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
    #[error("{0} must use http or https")]
    UnsupportedScheme(&'static str),
}

impl AppConfig {
    /// Load and validate the configuration baked into this build.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered; callers are expected
    /// to refuse to mount the app on failure.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SIGNUP_AUTH_URL"),
            option_env!("SIGNUP_AUTH_ANON_KEY"),
            option_env!("SIGNUP_REDIRECT_BASE"),
        )
    }

    fn from_values(
        auth_url: Option<&str>,
        anon_key: Option<&str>,
        redirect_base: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            auth_url: require_base_url("SIGNUP_AUTH_URL", auth_url)?,
            anon_key: require_value("SIGNUP_AUTH_ANON_KEY", anon_key)?,
            redirect_base: require_base_url("SIGNUP_REDIRECT_BASE", redirect_base)?,
        })
    }
}

fn require_value(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    let raw = value.ok_or(ConfigError::Missing(name))?.trim();
    if raw.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(raw.to_owned())
}

/// Validate an absolute http(s) URL and strip any trailing slash so path
/// segments can be appended with plain `format!`.
fn require_base_url(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    let raw = require_value(name, value)?;
    let parsed = Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(name));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
