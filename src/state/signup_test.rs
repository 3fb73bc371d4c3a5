use super::*;

#[test]
fn default_status_is_idle() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
    assert!(!SubmitStatus::Idle.is_submitting());
}

#[test]
fn submitting_reports_in_flight() {
    assert!(SubmitStatus::Submitting.is_submitting());
}
