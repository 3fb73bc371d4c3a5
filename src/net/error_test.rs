use super::*;

fn body(error_code: Option<&str>, msg: Option<&str>) -> ErrorBody {
    ErrorBody {
        error_code: error_code.map(str::to_owned),
        msg: msg.map(str::to_owned),
        ..ErrorBody::default()
    }
}

#[test]
fn machine_code_maps_invalid_credentials() {
    let err = classify(400, &body(Some("invalid_credentials"), Some("Invalid login credentials")));
    assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
    assert_eq!(err.message, "Invalid login credentials");
}

#[test]
fn machine_code_maps_rate_limit() {
    let err = classify(429, &body(Some("over_request_rate_limit"), Some("too many requests")));
    assert_eq!(err.kind, AuthErrorKind::RateLimited);
}

#[test]
fn machine_code_wins_over_status() {
    // A rate-limit status with a credential code still classifies by code.
    let err = classify(429, &body(Some("weak_password"), Some("Password too weak")));
    assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
}

#[test]
fn unknown_machine_code_is_unknown() {
    let err = classify(422, &body(Some("user_already_exists"), Some("User already registered")));
    assert_eq!(err.kind, AuthErrorKind::Unknown);
    assert_eq!(err.message, "User already registered");
}

#[test]
fn status_429_without_code_is_rate_limited() {
    let err = classify(429, &body(None, Some("slow down")));
    assert_eq!(err.kind, AuthErrorKind::RateLimited);
}

#[test]
fn legacy_message_maps_invalid_credentials() {
    let err = classify(400, &body(None, Some("Invalid login credentials")));
    assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
    assert_eq!(err.display_text(), "Invalid login credentials");
}

#[test]
fn unclassifiable_body_is_unknown_with_fallback_message() {
    let err = classify(500, &ErrorBody::default());
    assert_eq!(err.kind, AuthErrorKind::Unknown);
    assert_eq!(err.message, "sign-up failed");
}

#[test]
fn legacy_field_names_still_carry_the_message() {
    let parsed: ErrorBody = serde_json::from_value(serde_json::json!({
        "error": "invalid_grant",
        "error_description": "Invalid email or password"
    }))
    .unwrap();
    let err = classify(400, &parsed);
    assert_eq!(err.message, "Invalid email or password");
    assert_eq!(err.kind, AuthErrorKind::InvalidCredentials);
}

#[test]
fn network_constructor_sets_kind() {
    let err = AuthError::network("connection refused");
    assert_eq!(err.kind, AuthErrorKind::NetworkFailure);
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn display_text_is_fixed_per_kind() {
    assert_eq!(
        AuthErrorKind::NetworkFailure.display_text(),
        "Network error. Check your connection and try again."
    );
    assert_eq!(
        AuthErrorKind::RateLimited.display_text(),
        "Too many attempts. Wait a moment and try again."
    );
    assert_eq!(
        AuthErrorKind::Unknown.display_text(),
        "Sign-up failed. Please try again."
    );
}
