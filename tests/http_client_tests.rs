//! Integration tests for the transport layer.
//!
//! These tests verify default headers, the retry loop for 429 and 500
//! responses, and how error bodies are turned into messages.

mod common;

use common::{api_path, client_for, client_with_tries};
use serde_json::json;
use shopify_rest::clients::{HttpClient, HttpMethod, HttpRequest};
use shopify_rest::{
    AccessToken, ApiVersion, BaseUrl, HttpError, InvalidHttpRequestError, RestError, ShopDomain,
    ShopifyConfig,
};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ShopifyConfig {
    ShopifyConfig::builder()
        .shop(ShopDomain::new("fooshop").unwrap())
        .access_token(AccessToken::new("shpat_test_token").unwrap())
        .api_version(ApiVersion::V2025_07)
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("my-app/1.0")
        .build()
        .unwrap()
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_requests_carry_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("shop")))
        .and(header("X-Shopify-Access-Token", "shpat_test_token"))
        .and(header("Accept", "application/json"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shop": {"id": 1}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = assert_ok!(client.get("shop", None).await);

    assert_eq!(response.code, 200);
    assert_eq!(response.body["shop"]["id"], 1);
}

#[tokio::test]
async fn test_user_agent_includes_prefix() {
    let mock_server = MockServer::start().await;
    let client = assert_ok!(HttpClient::new("/admin/api/2025-07", &config_for(&mock_server)));

    let user_agent = &client.default_headers()["User-Agent"];
    assert!(user_agent.starts_with("my-app/1.0 | Shopify REST Client v"));
    assert!(user_agent.contains("| Rust "));
    assert_eq!(client.base_uri(), mock_server.uri());
    assert_eq!(client.base_path(), "/admin/api/2025-07");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;
    let body = json!({"product": {"title": "Burton Custom Freestyle 151"}});

    Mock::given(method("POST"))
        .and(path("/admin/api/2025-07/products.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"product": {"id": 1}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = assert_ok!(HttpClient::new("/admin/api/2025-07", &config_for(&mock_server)));
    let request = assert_ok!(HttpRequest::builder(HttpMethod::Post, "products.json")
        .body(body.clone())
        .build());
    let response = assert_ok!(client.request(request).await);

    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_response_exposes_shopify_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": []}))
                .insert_header("X-Shopify-Shop-Api-Call-Limit", "39/40")
                .insert_header("X-Request-Id", "req-123"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = assert_ok!(client.get("products", None).await);

    let limit = response.api_call_limit.unwrap();
    assert_eq!(limit.request_count, 39);
    assert_eq!(limit.remaining(), 1);
    assert_eq!(response.request_id(), Some("req-123"));
    assert_eq!(response.link_header(), None);
}

#[test]
fn test_body_must_match_method() {
    let missing = HttpRequest::builder(HttpMethod::Put, "products/1.json").build();
    assert_eq!(
        missing.unwrap_err(),
        InvalidHttpRequestError::MissingBody {
            method: "put".to_string()
        }
    );

    let unexpected = HttpRequest::builder(HttpMethod::Get, "products.json")
        .body(json!({}))
        .build();
    assert!(matches!(
        unexpected,
        Err(InvalidHttpRequestError::UnexpectedBody { .. })
    ));
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_429_is_retried_after_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."}))
                .insert_header("Retry-After", "0"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .mount(&mock_server)
        .await;

    let client = client_with_tries(&mock_server, 2);
    let response = assert_ok!(client.get("products", None).await);

    assert_eq!(response.code, 200);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_exhausted_retries_report_last_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."}))
                .insert_header("Retry-After", "0")
                .insert_header("X-Request-Id", "req-429"),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_with_tries(&mock_server, 3);
    let error = assert_err!(client.get("products", None).await);

    assert_eq!(
        error.to_string(),
        "Exceeded maximum retry count of 3. Last message: Exceeded 2 calls per second for api client."
    );
    assert_eq!(error.status(), Some(429));
    assert!(matches!(
        error,
        RestError::Http(HttpError::MaxRetries(ref e)) if e.error_reference.as_deref() == Some("req-429")
    ));
}

#[tokio::test]
async fn test_single_try_fails_without_retrying() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("products")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = assert_err!(client.get("products", None).await);

    assert!(matches!(error, RestError::Http(HttpError::Response(_))));
    assert_eq!(error.to_string(), "Unknown Error");
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("products/1")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with_tries(&mock_server, 3);
    let error = assert_err!(client.get("products/1", None).await);

    assert_eq!(error.to_string(), "Not Found");
    assert_eq!(error.status(), Some(404));
}

// ============================================================================
// Error Message Tests
// ============================================================================

async fn error_message_for(status: u16, body: serde_json::Value) -> String {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("products")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = assert_err!(client.post("products", json!({"product": {}}), None).await);
    error.to_string()
}

#[tokio::test]
async fn test_error_messages_from_bodies() {
    assert_eq!(
        error_message_for(
            422,
            json!({"errors": {"title": ["can't be blank"], "handle": ["is taken"]}})
        )
        .await,
        "handle: is taken, title: can't be blank"
    );
    assert_eq!(
        error_message_for(400, json!({"errors": ["first", "second"]})).await,
        "first, second"
    );
    assert_eq!(
        error_message_for(
            401,
            json!({"error": "invalid_token", "error_description": "token expired"})
        )
        .await,
        "invalid_token: token expired"
    );
    assert_eq!(
        error_message_for(403, json!({"message": "nope"})).await,
        "Unknown Error"
    );
}

#[tokio::test]
async fn test_invalid_path_is_rejected_before_sending() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let error = assert_err!(client.get("/.json", None).await);

    assert!(matches!(error, RestError::InvalidPath { ref path } if path == "/.json"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
