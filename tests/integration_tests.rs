//! Integration tests using mock HTTP server
//!
//! Tests the full flow: client construction → session → paginated accessors

use chrono::NaiveDate;
use pgdata_client::models::{decode_records, GrossDailyKwh};
use pgdata_client::{ClientConfig, ErrorKind, PgDataClient, Resource, ResourceQuery};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

async fn token_client(server: &MockServer) -> PgDataClient {
    let addr = server.address();
    let config = ClientConfig::new(
        &format!("http://{}", addr.ip()),
        addr.port(),
        Some("tok".to_string()),
        None,
        None,
    )
    .unwrap();
    PgDataClient::new(config).unwrap()
}

async fn login_client(server: &MockServer) -> PgDataClient {
    let addr = server.address();
    let config = ClientConfig::new(
        &format!("http://{}", addr.ip()),
        addr.port(),
        None,
        Some("alice".to_string()),
        Some("secret".to_string()),
    )
    .unwrap();
    PgDataClient::new(config).unwrap()
}

fn page(results: serde_json::Value, next: Option<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"results": results, "next": next}))
}

// ============================================================================
// Parameterless accessors
// ============================================================================

#[test_case(Resource::Locations ; "locations")]
#[test_case(Resource::Systems ; "systems")]
#[test_case(Resource::IrradiationSources ; "irradiation sources")]
#[test_case(Resource::PvoutSources ; "pvout sources")]
#[test_case(Resource::WindSources ; "wind sources")]
#[test_case(Resource::TemperatureSources ; "temperature sources")]
#[test_case(Resource::UtilityFootprint ; "utility footprint")]
#[tokio::test]
async fn test_parameterless_accessor_issues_one_bare_request(resource: Resource) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(resource.path()))
        .respond_with(page(json!([{"id": 1}]), None))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    let records = match resource {
        Resource::Locations => session.get_locations().await,
        Resource::Systems => session.get_systems(None, None).await,
        Resource::IrradiationSources => session.get_irradiation_sources().await,
        Resource::PvoutSources => session.get_pvout_sources().await,
        Resource::WindSources => session.get_wind_sources().await,
        Resource::TemperatureSources => session.get_temperature_sources().await,
        Resource::UtilityFootprint => session.get_utility_footprint().await,
        other => panic!("{other} takes arguments"),
    }
    .unwrap();
    assert_eq!(records, vec![json!({"id": 1})]);

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_three_pages_concatenated_in_order() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/wind-hourly"))
        .and(query_param("source", "W-1"))
        .respond_with(page(
            json!([{"n": 1}, {"n": 2}]),
            Some(format!("{base}/api/wind-hourly?cursor=2")),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/wind-hourly"))
        .and(query_param("cursor", "2"))
        .respond_with(page(
            json!([{"n": 3}]),
            Some(format!("{base}/api/wind-hourly?cursor=3")),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/wind-hourly"))
        .and(query_param("cursor", "3"))
        .respond_with(page(json!([{"n": 4}, {"n": 5}]), None))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    let start = NaiveDate::from_ymd_opt(2023, 7, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let end = NaiveDate::from_ymd_opt(2023, 7, 2)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let records = session.get_wind_hourly("W-1", start, end).await.unwrap();
    let ns: Vec<i64> = records.iter().map(|r| r["n"].as_i64().unwrap()).collect();
    assert_eq!(ns, vec![1, 2, 3, 4, 5]);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_server_error_mid_collection_returns_nothing() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/api/locations"))
        .respond_with(page(
            json!([{"id": "LOC-1"}]),
            Some(format!("{base}/api/locations/page2")),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/locations/page2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    let err = session.get_locations().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("boom"));
}

#[test_case(400 ; "bad request")]
#[test_case(403 ; "forbidden")]
#[test_case(500 ; "internal error")]
#[tokio::test]
async fn test_error_status_is_request_error(status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    let err = session.get_utility_footprint().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status(), Some(status));
}

// ============================================================================
// Token resolution
// ============================================================================

#[tokio::test]
async fn test_login_once_for_many_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api-token-auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "issued"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(page(json!([]), None))
        .mount(&mock_server)
        .await;

    let client = login_client(&mock_server).await;
    let session = client.session().await.unwrap();
    session.get_locations().await.unwrap();
    session.get_systems(Some("S-1"), None).await.unwrap();
    session.get_util_expenses("S-1", Some(2023), None).await.unwrap();

    let auth_headers: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r: &&Request| r.method.as_str() == "GET")
        .map(|r| r.headers["authorization"].to_str().unwrap().to_string())
        .collect();
    assert_eq!(auth_headers, vec!["Token issued"; 3]);
}

#[tokio::test]
async fn test_login_without_token_field_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api-token-auth/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "ok"})))
        .mount(&mock_server)
        .await;

    let client = login_client(&mock_server).await;
    let err = client.session().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

// ============================================================================
// Query mapping
// ============================================================================

#[tokio::test]
async fn test_utility_revenue_without_period_sends_only_system_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/utility-revenue"))
        .respond_with(page(json!([]), None))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    session.get_util_revenues("S-9", None, None).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("system_id=S-9"));
}

#[tokio::test]
async fn test_fetch_generic_query_and_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/gross-kwh-daily"))
        .and(query_param("ts__gte", "2023-01-01"))
        .and(query_param("ts__lte", "2023-01-02"))
        .respond_with(page(
            json!([
                {"system_id": "S-1", "ts": "2023-01-01", "value": 401.0},
                {"system_id": "S-1", "ts": "2023-01-02", "value": 388.5}
            ]),
            None,
        ))
        .mount(&mock_server)
        .await;

    let client = token_client(&mock_server).await;
    let session = client.session().await.unwrap();
    let query = ResourceQuery::gross_kwh_daily(
        "S-1",
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(),
    );

    let rows: Vec<GrossDailyKwh> = decode_records(session.fetch(query).await.unwrap()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].ts, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
    assert!((rows[1].value - 388.5).abs() < f64::EPSILON);
}
