use super::*;

fn config() -> AppConfig {
    AppConfig {
        auth_url: "https://auth.example.com".to_owned(),
        anon_key: "anon-key-123".to_owned(),
        redirect_base: "https://app.example.com".to_owned(),
    }
}

#[test]
fn signup_endpoint_formats_expected_path() {
    assert_eq!(
        signup_endpoint("https://auth.example.com"),
        "https://auth.example.com/auth/v1/signup"
    );
}

#[test]
fn signup_payload_carries_credentials_verbatim() {
    let payload = signup_payload("a@b.com", "secret123");
    assert_eq!(
        payload,
        serde_json::json!({ "email": "a@b.com", "password": "secret123" })
    );
}

#[test]
fn signup_payload_does_not_trim_or_rewrite() {
    let payload = signup_payload(" a@b.com ", "pass word");
    assert_eq!(payload["email"], " a@b.com ");
    assert_eq!(payload["password"], "pass word");
}

#[test]
fn oauth_redirect_target_appends_callback_path() {
    assert_eq!(
        oauth_redirect_target(&config()),
        "https://app.example.com/auth-callback"
    );
}

#[test]
fn authorize_url_encodes_redirect_target() {
    assert_eq!(
        authorize_url(&config(), OAuthProvider::Google),
        "https://auth.example.com/auth/v1/authorize?provider=google&redirect_to=\
         https%3A%2F%2Fapp.example.com%2Fauth-callback"
    );
}

#[test]
fn provider_slug_matches_wire_value() {
    assert_eq!(OAuthProvider::Google.as_str(), "google");
}
