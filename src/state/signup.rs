//! Submission lifecycle for the signup form.
//!
//! DESIGN
//! ======
//! A single explicit status keeps at most one attempt in flight: action
//! controls are disabled while `Submitting` and re-enabled when the attempt
//! settles with an error. A successful attempt navigates away instead of
//! settling.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No attempt in flight; controls enabled.
    #[default]
    Idle,
    /// An attempt is running; controls disabled, further clicks ignored.
    Submitting,
}

impl SubmitStatus {
    /// True while an attempt is in flight.
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
