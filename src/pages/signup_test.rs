use super::*;
use crate::net::error::AuthErrorKind;

#[test]
fn attempt_reset_clears_error_and_enters_submitting() {
    let (status, error) = attempt_reset(SubmitStatus::Idle).unwrap();
    assert_eq!(status, SubmitStatus::Submitting);
    assert_eq!(error, None);
}

#[test]
fn attempt_reset_refuses_while_in_flight() {
    assert_eq!(attempt_reset(SubmitStatus::Submitting), None);
}

#[test]
fn settle_failure_surfaces_error_and_reenables_controls() {
    let err = AuthError::unknown("boom");
    let (status, surfaced) = settle_failure(err.clone());
    assert_eq!(status, SubmitStatus::Idle);
    assert_eq!(surfaced, Some(err));
}

#[test]
fn settled_invalid_credentials_render_the_fixed_text() {
    let (_, surfaced) = settle_failure(AuthError {
        kind: AuthErrorKind::InvalidCredentials,
        message: "Invalid login credentials".to_owned(),
    });
    assert_eq!(surfaced.unwrap().display_text(), "Invalid login credentials");
}
