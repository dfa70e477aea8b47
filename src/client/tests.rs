//! Tests for the client module

use super::*;
use crate::auth::Credentials;
use crate::error::ErrorKind;
use crate::http::{RateLimiterConfig, Timeouts};
use chrono::NaiveDate;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Split a mock server URI into host and port
fn host_port(server: &MockServer) -> (String, u16) {
    let addr = server.address();
    (format!("http://{}", addr.ip()), addr.port())
}

fn empty_page() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"results": [], "next": null}))
}

// ============================================================================
// ClientConfig
// ============================================================================

#[test]
fn test_config_normalizes_host() {
    let config = ClientConfig::new(
        "https://pgdata.example///",
        443,
        Some("tok".into()),
        None,
        None,
    )
    .unwrap();
    assert_eq!(config.base_url(), "https://pgdata.example:443");
    assert_eq!(config.credentials(), &Credentials::token("tok"));
    assert_eq!(config.timeouts(), Timeouts::default());
}

#[test]
fn test_config_requires_exactly_one_credential_form() {
    let err = ClientConfig::new("https://pgdata.example", 443, None, None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = ClientConfig::new(
        "https://pgdata.example",
        443,
        Some("tok".into()),
        Some("user".into()),
        Some("pass".into()),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = ClientConfig::new(
        "https://pgdata.example",
        443,
        None,
        Some("user".into()),
        None,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn test_config_rejects_bad_host() {
    let creds = Credentials::token("tok");
    assert!(ClientConfig::with_credentials("", 443, creds.clone()).is_err());
    assert!(ClientConfig::with_credentials("pgdata.example", 443, creds.clone()).is_err());
    assert!(ClientConfig::with_credentials("http://host:8080", 443, creds).is_err());
}

#[test]
fn test_http_config_carries_settings() {
    let timeouts = Timeouts::new(Duration::from_secs(1), Duration::from_secs(2));
    let config = ClientConfig::with_credentials(
        "https://pgdata.example",
        8443,
        Credentials::token("tok"),
    )
    .unwrap()
    .with_timeouts(timeouts)
    .with_rate_limit(RateLimiterConfig::per_second(4))
    .with_user_agent("monthly-report/2.0");

    let http = config.http_config();
    assert_eq!(http.base_url.as_deref(), Some("https://pgdata.example:8443"));
    assert_eq!(http.timeouts, timeouts);
    assert_eq!(http.rate_limit, Some(RateLimiterConfig::per_second(4)));
    assert_eq!(http.user_agent, "monthly-report/2.0");
}

#[test]
fn test_config_debug_hides_password() {
    let config = ClientConfig::new(
        "https://pgdata.example",
        443,
        None,
        Some("alice".into()),
        Some("hunter2".into()),
    )
    .unwrap();
    let shown = format!("{config:?}");
    assert!(shown.contains("alice"));
    assert!(!shown.contains("hunter2"));
}

// ============================================================================
// Sessions
// ============================================================================

#[tokio::test]
async fn test_session_logs_in_once_across_calls() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("POST"))
        .and(path("/api-token-auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "tok-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Token tok-1"))
        .respond_with(empty_page())
        .expect(3)
        .mount(&mock_server)
        .await;

    let config =
        ClientConfig::new(&host, port, None, Some("alice".into()), Some("pw".into())).unwrap();
    let client = PgDataClient::new(config).unwrap();

    {
        let session = client.session().await.unwrap();
        session.get_locations().await.unwrap();
        session.get_wind_sources().await.unwrap();
    }

    // A second session on the same client reuses the token
    let session = client.session().await.unwrap();
    session.get_utility_footprint().await.unwrap();
}

#[tokio::test]
async fn test_session_with_token_never_logs_in() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "x"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Token preissued"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&host, port, Some("preissued".into()), None, None).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let session = client.session().await.unwrap();
    session.get_pvout_sources().await.unwrap();
}

#[tokio::test]
async fn test_session_login_failure() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("POST"))
        .and(path("/api-token-auth/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "non_field_errors": ["Unable to log in with provided credentials."]
        })))
        .mount(&mock_server)
        .await;

    let config =
        ClientConfig::new(&host, port, None, Some("alice".into()), Some("bad".into())).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let err = client.session().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(!client.http().authenticator().unwrap().is_resolved().await);
}

#[tokio::test]
async fn test_systems_conflict_fails_before_request() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("GET"))
        .respond_with(empty_page())
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&host, port, Some("tok".into()), None, None).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let session = client.session().await.unwrap();

    let err = session
        .get_systems(Some("S-1"), Some("osaka"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[tokio::test]
async fn test_systems_empty_id_sends_no_filter() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/systems"))
        .respond_with(empty_page())
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&host, port, Some("tok".into()), None, None).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let session = client.session().await.unwrap();
    session.get_systems(Some(""), None).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn test_gross_daily_kwh_request() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/gross-kwh-daily"))
        .and(query_param("system_id", "S-1"))
        .and(query_param("ts__gte", "2023-01-01"))
        .and(query_param("ts__lte", "2023-01-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"system_id": "S-1", "ts": "2023-01-01", "value": 412.5}],
            "next": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&host, port, Some("tok".into()), None, None).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let session = client.session().await.unwrap();

    let records = session
        .get_gross_daily_kwh(
            "S-1",
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["value"], 412.5);
}

#[tokio::test]
async fn test_session_timeout_applies_to_requests() {
    let mock_server = MockServer::start().await;
    let (host, port) = host_port(&mock_server);

    Mock::given(method("GET"))
        .respond_with(empty_page().set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&host, port, Some("tok".into()), None, None).unwrap();
    let client = PgDataClient::new(config).unwrap();
    let session = client
        .session()
        .await
        .unwrap()
        .with_timeout(Duration::from_millis(50));

    let err = session.get_locations().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Request);
}
