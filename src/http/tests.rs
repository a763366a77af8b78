//! Tests for the HTTP client module

use super::*;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_none());
    assert!(config.user_agent.starts_with("character-browser/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(60))
        .rate_limit(RateLimiterConfig::new(5, 5))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(5, 5)));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_resolves_relative_references() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/api/character")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let resolve = |reference: &str| client.build_url(reference).unwrap().to_string();

    assert_eq!(resolve(""), "https://api.example.com/api/character");
    assert_eq!(
        resolve("?page=2"),
        "https://api.example.com/api/character?page=2"
    );
    assert_eq!(resolve("page2"), "https://api.example.com/api/page2");
    assert_eq!(resolve("/page2"), "https://api.example.com/page2");
    assert_eq!(
        resolve("https://other.example.com/page2"),
        "https://other.example.com/page2"
    );
}

#[test]
fn test_build_url_directory_base() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/api/character/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("2").unwrap().as_str(),
        "https://api.example.com/api/character/2"
    );
}

#[test]
fn test_build_url_relative_without_base() {
    let client = HttpClient::new().unwrap();
    assert!(matches!(
        client.build_url("page2"),
        Err(crate::error::Error::InvalidUrl(_))
    ));
}

#[tokio::test]
async fn test_http_client_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"id": 1, "name": "Rick"}]
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client.get("/api/character").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_returns_error_status_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Character not found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client.get("/api/character/999").await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_http_client_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .get(&format!("{}/api/flaky", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn test_http_client_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(header("User-Agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .user_agent("test-agent/1.0")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client.get("/api/character").await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_with_rate_limiter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .rate_limit(RateLimiterConfig::new(100, 10))
        .build();

    let client = HttpClient::with_config(config).unwrap();
    assert!(format!("{client:?}").contains("has_rate_limiter: true"));

    for _ in 0..3 {
        let response = client.get("/api/character").await.unwrap();
        assert_eq!(response.status(), 200);
    }
}

#[tokio::test]
async fn test_http_client_connection_error() {
    // Nothing listens on port 1
    let client = HttpClient::new().unwrap();
    let err = client.get("http://127.0.0.1:1/api").await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Http(_)));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("has_rate_limiter"));
}
