//! Tests for the transport module

use super::*;
use crate::config::HttpConfig;
use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_config() -> HttpTransportConfig {
    HttpTransportConfig::builder()
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(5),
            Duration::from_millis(10),
        )
        .no_rate_limit()
        .build()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_transport_config_from_http_config() {
    let config = HttpTransportConfig::from(&HttpConfig::default());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.retry_statuses, vec![202, 429, 500, 502, 503, 504]);
    assert_eq!(config.backoff_type, BackoffType::Exponential);
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("bgg-client/"));
    assert_eq!(config.max_concurrent_requests, 10);
}

#[test]
fn test_transport_config_builder() {
    let config = HttpTransportConfig::builder()
        .timeout(Duration::from_secs(60))
        .max_retries(7)
        .retry_statuses(vec![503])
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 7);
    assert_eq!(config.retry_statuses, vec![503]);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(config.initial_backoff, Duration::from_millis(200));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_calculate_backoff() {
    let transport = HttpTransport::new(
        HttpTransportConfig::builder()
            .backoff(
                BackoffType::Exponential,
                Duration::from_millis(100),
                Duration::from_millis(500),
            )
            .no_rate_limit()
            .build(),
    )
    .unwrap();

    assert_eq!(transport.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(transport.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(transport.calculate_backoff(2), Duration::from_millis(400));
    assert_eq!(transport.calculate_backoff(3), Duration::from_millis(500));
    assert!(!transport.has_rate_limiter());
}

// ============================================================================
// HTTP Transport Tests
// ============================================================================

#[tokio::test]
async fn test_http_transport_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/xmlapi2/hot"))
        .and(query_param("type", "boardgame"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<items></items>"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(fast_config()).unwrap();
    let body = transport
        .fetch(&format!("{}/xmlapi2/hot?type=boardgame", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<items></items>");
}

#[tokio::test]
async fn test_http_transport_retries_queued_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/xmlapi2/collection"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/xmlapi2/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<items totalitems=\"0\"/>"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(fast_config()).unwrap();
    let body = transport
        .fetch(&format!("{}/xmlapi2/collection?username=x", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<items totalitems=\"0\"/>");
}

#[tokio::test]
async fn test_http_transport_retries_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(fast_config()).unwrap();
    let err = transport
        .fetch(&format!("{}/xmlapi2/thing?id=1", mock_server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_http_transport_client_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(fast_config()).unwrap();
    let err = transport
        .fetch(&format!("{}/xmlapi2/user", mock_server.uri()))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_http_transport_honors_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<user/>"))
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::new(fast_config()).unwrap();
    let body = transport
        .fetch(&format!("{}/xmlapi2/user?name=x", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "<user/>");
}

#[tokio::test]
async fn test_http_transport_caps_requests_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/xmlapi2/hot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<items></items>")
                .set_delay(Duration::from_millis(150)),
        )
        .expect(4)
        .mount(&mock_server)
        .await;

    let config = HttpTransportConfig::builder()
        .no_rate_limit()
        .max_concurrent_requests(2)
        .build();
    let transport = std::sync::Arc::new(HttpTransport::new(config).unwrap());
    assert_eq!(transport.available_slots(), 2);

    let url = format!("{}/xmlapi2/hot", mock_server.uri());
    let started = std::time::Instant::now();
    let fetches = (0..4).map(|_| {
        let transport = std::sync::Arc::clone(&transport);
        let url = url.clone();
        tokio::spawn(async move { transport.fetch(&url).await })
    });
    for joined in futures::future::join_all(fetches).await {
        assert_eq!(joined.unwrap().unwrap(), "<items></items>");
    }

    // Four 150ms requests through two slots take at least two rounds
    assert!(started.elapsed() >= Duration::from_millis(300));
    assert_eq!(transport.available_slots(), 2);
}

#[test]
fn test_http_transport_rejects_zero_slots() {
    let config = HttpTransportConfig::builder().max_concurrent_requests(0).build();
    assert!(matches!(HttpTransport::new(config), Err(Error::Config { .. })));
}

// ============================================================================
// Fixture Transport Tests
// ============================================================================

#[tokio::test]
async fn test_fixture_transport_ignores_query_order() {
    let transport = FixtureTransport::new()
        .with_document("https://bgg.test/xmlapi2/thing?id=1&stats=1", "<items/>");

    let body = transport
        .fetch("https://bgg.test/xmlapi2/thing?stats=1&id=1")
        .await
        .unwrap();

    assert_eq!(body, "<items/>");
    assert_eq!(transport.fetch_count(), 1);
    assert_eq!(
        transport.requested_urls(),
        vec!["https://bgg.test/xmlapi2/thing?stats=1&id=1".to_string()]
    );
}

#[tokio::test]
async fn test_fixture_transport_failures() {
    let transport =
        FixtureTransport::new().with_status("https://bgg.test/xmlapi2/forum?id=3", 500, "down");

    let err = transport
        .fetch("https://bgg.test/xmlapi2/forum?id=3")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));

    let err = transport
        .fetch("https://bgg.test/xmlapi2/forum?id=4")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::FixtureNotFound { .. }));
    assert_eq!(transport.fetch_count(), 2);
}

#[test]
fn test_canonical_url() {
    assert_eq!(
        canonical_url("https://bgg.test/a?b=2&a=1"),
        canonical_url("https://bgg.test/a?a=1&b=2")
    );
    assert_eq!(canonical_url("https://bgg.test/a?"), "https://bgg.test/a");
    assert_eq!(canonical_url("not a url"), "not a url");
}
