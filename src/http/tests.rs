//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::request::{PageRequest, RequestBuilder, GQL_PATH, PAGE_LIMIT};
use crate::types::{BackoffType, Credential};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(max_retries: u32) -> HttpSettings {
    HttpSettings {
        timeout: Duration::from_secs(5),
        retry: RetryPolicy {
            max_retries,
            backoff: BackoffType::Constant,
            initial_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_secs(1),
        },
        rate_limit: None,
    }
}

fn test_client(base_url: &str, max_retries: u32) -> HttpClient {
    HttpClient::new(&Url::parse(base_url).unwrap(), &settings(max_retries)).unwrap()
}

fn page_request() -> PageRequest {
    RequestBuilder::new("aix-en-provence", Credential::new("12345"), PAGE_LIMIT)
        .unwrap()
        .page(None)
        .unwrap()
}

// ============================================================================
// Settings and Endpoint Tests
// ============================================================================

#[test]
fn test_http_settings_default() {
    let settings = HttpSettings::default();
    assert_eq!(settings.timeout, Duration::from_secs(30));
    assert_eq!(settings.retry.max_retries, 3);
    assert_eq!(settings.retry.backoff, BackoffType::Exponential);
    assert_eq!(settings.rate_limit, Some(RateLimit::default()));
}

#[test]
fn test_endpoint_joins_base_url() {
    let client = test_client("https://api.meetup.com", 0);
    assert_eq!(
        client.endpoint(GQL_PATH).unwrap().as_str(),
        "https://api.meetup.com/gql"
    );
    assert_eq!(
        client.endpoint("/gql").unwrap().as_str(),
        "https://api.meetup.com/gql"
    );
}

#[test]
fn test_endpoint_keeps_base_path() {
    let client = test_client("http://localhost:8080/proxy/meetup", 0);
    assert_eq!(
        client.endpoint(GQL_PATH).unwrap().as_str(),
        "http://localhost:8080/proxy/meetup/gql"
    );
}

#[test]
fn test_debug_hides_transport_internals() {
    let client = test_client("https://api.meetup.com", 0);
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(debug_str.contains("throttled: false"));
}

// ============================================================================
// Transport Tests
// ============================================================================

#[tokio::test]
async fn test_post_json_sends_body_and_headers() {
    let mock_server = MockServer::start().await;
    let request = page_request();

    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(header("Authorization", "Bearer 12345"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(request.body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 0);
    let body = client.post_json(GQL_PATH, &request).await.unwrap();

    assert_eq!(body, json!({"data": null}));
}

#[tokio::test]
async fn test_post_json_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 3);
    let err = client.post_json(GQL_PATH, &page_request()).await.unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}

#[tokio::test]
async fn test_post_json_401_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 3);
    let err = client.post_json(GQL_PATH, &page_request()).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid token");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_on_500() {
    let mock_server = MockServer::start().await;

    // First two calls return 500, third succeeds
    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 2);
    let body = client.post_json(GQL_PATH, &page_request()).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_rate_limited_retry_uses_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 1);
    let body = client.post_json(GQL_PATH, &page_request()).await.unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_rate_limited_without_retries_left() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 0);
    let err = client.post_json(GQL_PATH, &page_request()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_seconds: 7
        }
    ));
}

#[tokio::test]
async fn test_last_error_returned_when_retries_run_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Unavailable"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri(), 2);
    let err = client.post_json(GQL_PATH, &page_request()).await.unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Unavailable");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_retried_then_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .set_delay(Duration::from_millis(500)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut settings = settings(1);
    settings.timeout = Duration::from_millis(100);
    let client = HttpClient::new(&Url::parse(&mock_server.uri()).unwrap(), &settings).unwrap();

    let err = client.post_json(GQL_PATH, &page_request()).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
}
