mod common;

use common::{blocking, full_fingerprint, init_tracing};
use glitch_sdk::{
    fingerprint_install_to_json, ClientConfig, FingerprintComponents, FingerprintInstall,
    GlitchClient, PurchaseData, SdkError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: String) -> GlitchClient {
    GlitchClient::new(ClientConfig::with_base_url(base_url)).unwrap()
}

/// A config pointing at a closed local port.
fn unreachable_config() -> ClientConfig {
    ClientConfig {
        api_base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: Some(5),
        ..Default::default()
    }
}

// ── Install records ─────────────────────────────────────────────

#[tokio::test]
async fn create_install_record_posts_body_and_headers() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/title-1/installs"))
        .and(header("authorization", "Bearer tok_123"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"user_install_id": "user-1", "platform": "steam"})))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"install-uuid"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).create_install_record("tok_123", "title-1", "user-1", "steam")
    })
    .await
    .unwrap();

    assert_eq!(response.status, 201);
    assert!(response.is_success());
    assert_eq!(response.text(), r#"{"id":"install-uuid"}"#);
}

#[tokio::test]
async fn create_install_record_escapes_ids() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/title-1/installs"))
        .and(body_json(json!({"user_install_id": "odd\"id\\", "platform": "steam"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).create_install_record("tok", "title-1", "odd\"id\\", "steam")
    })
    .await
    .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn create_install_record_with_fingerprint_posts_nested_components() {
    init_tracing();
    let server = MockServer::start().await;

    let install = FingerprintInstall::new("user-1", "steam", full_fingerprint())
        .with_game_version("1.2.0")
        .with_referral_source("twitch");
    let expected: serde_json::Value =
        serde_json::from_str(&fingerprint_install_to_json(&install).unwrap()).unwrap();
    assert_eq!(expected["fingerprint_components"]["hardware"]["cores"], 14);

    Mock::given(method("POST"))
        .and(path("/api/titles/title-1/installs"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":"fp-install"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).create_install_record_with_fingerprint("tok", "title-1", &install)
    })
    .await
    .unwrap();

    assert_eq!(response.text(), r#"{"id":"fp-install"}"#);
}

#[tokio::test]
async fn title_id_is_path_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/my%20title%2F2/installs"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).create_install_record("tok", "my title/2", "u", "steam")
    })
    .await
    .unwrap();

    assert_eq!(response.status, 201);
}

// ── Purchases ───────────────────────────────────────────────────

#[tokio::test]
async fn record_purchase_posts_purchase_body() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/title-1/purchases"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "game_install_id": "install-uuid",
            "purchase_type": "in_app",
            "purchase_amount": 9.99,
            "currency": "USD",
            "quantity": 1,
            "metadata": {"store": "steam"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .expect(1)
        .mount(&server)
        .await;

    let purchase = PurchaseData::new("install-uuid")
        .with_purchase_type("in_app")
        .with_amount(9.99, "USD")
        .with_quantity(1)
        .with_metadata_json(r#"{"store":"steam"}"#);

    let base = server.uri();
    let response = blocking(move || client_for(base).record_purchase("tok", "title-1", &purchase))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.into_body(), b"created");
}

// ── HTTP error statuses ─────────────────────────────────────────

#[tokio::test]
async fn error_status_is_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/title-1/purchases"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(r#"{"errors":{"game_install_id":["invalid"]}}"#),
        )
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).record_purchase("tok", "title-1", &PurchaseData::new("nope"))
    })
    .await
    .unwrap();

    assert_eq!(response.status, 422);
    assert!(!response.is_success());
    assert_eq!(response.text(), r#"{"errors":{"game_install_id":["invalid"]}}"#);

    let err = response.error_for_status().unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert!(!err.is_transport());
    assert!(err.to_string().contains("invalid"));
}

#[tokio::test]
async fn unauthorized_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthenticated."))
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).create_install_record("bad", "title-1", "u", "steam")
    })
    .await
    .unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(response.text(), "Unauthenticated.");
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/titles/t/installs"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/", server.uri());
    let response = blocking(move || client_for(base).create_install_record("tok", "t", "u", "p"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn non_utf8_body_is_returned_byte_for_byte() {
    let server = MockServer::start().await;
    let raw: Vec<u8> = vec![0x7b, 0xff, 0xfe, 0x7d];

    Mock::given(method("POST"))
        .and(path("/api/titles/t/purchases"))
        .respond_with(ResponseTemplate::new(500).set_body_raw(raw.clone(), "application/octet-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let response = blocking(move || {
        client_for(base).record_purchase("tok", "t", &PurchaseData::new("a"))
    })
    .await
    .unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.body, raw);
    assert_eq!(response.text(), "{\u{fffd}\u{fffd}}");
}

// ── Transport failures ──────────────────────────────────────────

#[test]
fn unreachable_host_fails_install() {
    let client = GlitchClient::new(unreachable_config()).unwrap();
    let err = client
        .create_install_record("tok", "title-1", "user-1", "steam")
        .unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
    assert!(err.is_transport());
    assert!(err.to_string().contains("transport error"));
}

#[test]
fn unreachable_host_fails_fingerprint_install() {
    let client = GlitchClient::new(unreachable_config()).unwrap();
    let install = FingerprintInstall::new("user-1", "steam", FingerprintComponents::default());
    let err = client
        .create_install_record_with_fingerprint("tok", "title-1", &install)
        .unwrap_err();
    assert!(err.to_string().contains("transport error"));
}

#[test]
fn unreachable_host_fails_purchase() {
    let client = GlitchClient::new(unreachable_config()).unwrap();
    let err = client
        .record_purchase("tok", "title-1", &PurchaseData::new("abc"))
        .unwrap_err();
    assert!(err.to_string().contains("transport error"));
    assert_eq!(err.status(), None);
}

#[test]
fn post_json_free_function_reports_transport_error() {
    let err = glitch_sdk::post_json("http://127.0.0.1:1/api/titles/t/installs", "tok", "{}".into())
        .unwrap_err();
    assert!(err.is_transport());
}
