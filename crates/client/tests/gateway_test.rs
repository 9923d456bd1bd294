//! Contract tests for the API gateway against a mock backend.
//!
//! Every failure mode the ordering flow relies on is pinned here: JSON
//! and non-JSON bodies, failure statuses with and without a `message`,
//! timeouts, unreachable hosts, and the unconfigured short-circuit.

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gourmet_express_client::config::AppConfig;
use gourmet_express_client::gateway::{ApiGateway, GatewayError};

fn gateway_for(server: &MockServer) -> ApiGateway {
    let config = AppConfig {
        api_base: Some(server.uri()),
        ..AppConfig::default()
    };
    ApiGateway::new(&config).expect("client builds")
}

// ============================================================================
// Success Shape Tests
// ============================================================================

#[tokio::test]
async fn test_get_parses_json_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "r1" }])))
        .expect(1)
        .mount(&server)
        .await;

    let payload = gateway_for(&server).get("/restaurants").await.unwrap();
    assert_eq!(payload, json!([{ "id": "r1" }]));
}

#[tokio::test]
async fn test_non_json_success_body_is_wrapped_as_a_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let payload = gateway_for(&server).get("/health").await.unwrap();
    assert_eq!(payload, json!({ "message": "pong" }));
}

#[tokio::test]
async fn test_empty_non_json_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let payload = gateway_for(&server).get("/health").await.unwrap();
    assert_eq!(payload, Value::Null);
}

#[tokio::test]
async fn test_post_sends_the_json_body() {
    let server = MockServer::start().await;
    let body = json!({ "restaurantId": "r1", "items": [] });
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "srv-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = gateway_for(&server).post_json("/orders", &body).await.unwrap();
    assert_eq!(payload, json!({ "id": "srv-1" }));
}

// ============================================================================
// Failure Status Tests
// ============================================================================

#[tokio::test]
async fn test_failure_status_surfaces_the_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Kitchen fire",
        })))
        .mount(&server)
        .await;

    let err = gateway_for(&server).get("/restaurants").await.unwrap_err();
    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Kitchen fire");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_status_without_a_message_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = gateway_for(&server).get("/restaurants").await.unwrap_err();
    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Request failed (503)");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_status_with_a_text_body_uses_the_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such route"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).get("/restaurants").await.unwrap_err();
    match err {
        GatewayError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such route");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ============================================================================
// Transport Failure Tests
// ============================================================================

#[tokio::test]
async fn test_slow_responses_abort_as_timeouts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let config = AppConfig {
        api_base: Some(server.uri()),
        request_timeout: Duration::from_millis(100),
        ..AppConfig::default()
    };
    let gateway = ApiGateway::new(&config).unwrap();

    let err = gateway.get("/restaurants").await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout), "got: {err:?}");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // TCP port 9 (discard) is reliably closed on loopback.
    let config = AppConfig {
        api_base: Some("http://127.0.0.1:9".to_owned()),
        request_timeout: Duration::from_millis(500),
        ..AppConfig::default()
    };
    let gateway = ApiGateway::new(&config).unwrap();

    let err = gateway.get("/restaurants").await.unwrap_err();
    assert!(
        matches!(err, GatewayError::Network(_) | GatewayError::Timeout),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unconfigured_gateway_short_circuits_without_io() {
    let gateway = ApiGateway::new(&AppConfig::default()).unwrap();

    let err = gateway.get("/restaurants").await.unwrap_err();
    assert!(matches!(err, GatewayError::NotConfigured));

    let err = gateway.post_json("/orders", &json!({})).await.unwrap_err();
    assert!(matches!(err, GatewayError::NotConfigured));
}
