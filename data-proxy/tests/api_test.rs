//! Integration tests for the HTTP API
//!
//! The contributions provider is replaced by a wiremock server and the year
//! is pinned so the `?y=` query is predictable.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use data_proxy::external::ContributionsClient;
use data_proxy::{router, AppState, ErrorBody, FixedYear, GitHubData, HealthResponse};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const YEAR: i32 = 2025;

fn app_for(provider_url: &str) -> Router {
    let provider = ContributionsClient::new(provider_url).expect("Failed to build client");
    router(AppState::new(provider).with_clock(FixedYear(YEAR)), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body).unwrap().error
}

fn provider_body() -> serde_json::Value {
    json!({
        "total": {"2024": 1200, "2025": 42, "lastYear": 900},
        "contributions": [
            {"date": "2025-01-01", "count": 0, "level": 0},
            {"date": "2025-01-02", "count": 30, "level": 4},
            {"date": "2025-01-03", "count": 12, "level": 2}
        ]
    })
}

#[tokio::test]
async fn test_get_data_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat"))
        .and(query_param("y", "2025"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = get(app_for(&mock_server.uri()), "/api/get-data?username=octocat").await;

    assert_eq!(status, StatusCode::OK);
    let data: GitHubData = serde_json::from_slice(&body).unwrap();
    assert_eq!(data.username, "octocat");
    assert_eq!(data.total, 42);
    assert_eq!(data.contributions.len(), 3);
    assert_eq!(data.contributions[1].count, 30);
    assert_eq!(data.contributions[1].level, 4);
}

#[tokio::test]
async fn test_get_data_only_exposes_normalized_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .mount(&mock_server)
        .await;

    let (_, body) = get(app_for(&mock_server.uri()), "/api/get-data?username=octocat").await;

    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["contributions", "total", "username"]);
}

#[tokio::test]
async fn test_get_data_defaults_missing_year_total_to_zero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/newcomer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": {"2024": 5},
            "contributions": []
        })))
        .mount(&mock_server)
        .await;

    let (status, body) = get(app_for(&mock_server.uri()), "/api/get-data?username=newcomer").await;

    assert_eq!(status, StatusCode::OK);
    let data: GitHubData = serde_json::from_slice(&body).unwrap();
    assert_eq!(data.total, 0);
    assert!(data.contributions.is_empty());
}

#[tokio::test]
async fn test_get_data_trims_username() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (status, body) = get(
        app_for(&mock_server.uri()),
        "/api/get-data?username=%20%20octocat%20",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data: GitHubData = serde_json::from_slice(&body).unwrap();
    assert_eq!(data.username, "octocat");
}

#[tokio::test]
async fn test_missing_username_never_reaches_provider() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for uri in [
        "/api/get-data",
        "/api/get-data?username=",
        "/api/get-data?username=%20%20%20",
    ] {
        let (status, body) = get(app_for(&mock_server.uri()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error_message(&body), "Username is required");
    }
}

#[tokio::test]
async fn test_undecodable_query_is_json_validation_error() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let response = app_for(&mock_server.uri())
        .oneshot(
            Request::builder()
                .uri("/api/get-data?username=a&username=b")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(error_message(&body), "Username is required");
}

#[tokio::test]
async fn test_provider_errors_become_not_found() {
    for provider_status in [404u16, 403, 500, 502] {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ghost"))
            .respond_with(ResponseTemplate::new(provider_status))
            .mount(&mock_server)
            .await;

        let (status, body) = get(app_for(&mock_server.uri()), "/api/get-data?username=ghost").await;

        assert_eq!(status, StatusCode::NOT_FOUND, "provider status {provider_status}");
        assert_eq!(error_message(&body), "User not found or API error");
    }
}

#[tokio::test]
async fn test_malformed_provider_body_is_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let (status, body) = get(app_for(&mock_server.uri()), "/api/get-data?username=octocat").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(&body), "Failed to fetch GitHub data");
}

#[tokio::test]
async fn test_network_failure_is_upstream_error() {
    // Reserve a port, then close it so nothing is listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (status, body) = get(
        app_for(&format!("http://{addr}")),
        "/api/get-data?username=octocat",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(&body), "Failed to fetch GitHub data");
}

#[tokio::test]
async fn test_health_and_hello() {
    let app = app_for("http://127.0.0.1:9");

    let (status, body) = get(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_slice::<HealthResponse>(&body).unwrap(),
        HealthResponse {
            status: "ok".to_string()
        }
    );

    let (status, body) = get(app, "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(value["message"].is_string());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let response = app_for("http://127.0.0.1:9")
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "https://somewhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_static_dir_serves_index_for_client_routes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>wrapped</html>").unwrap();
    std::fs::write(dir.path().join("style.css"), "body {}").unwrap();

    let provider = ContributionsClient::new("http://127.0.0.1:9").unwrap();
    let app = router(AppState::new(provider), Some(dir.path()));

    let (status, body) = get(app.clone(), "/results?username=octocat").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>wrapped</html>");

    let (status, body) = get(app.clone(), "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body {}");

    let (status, _) = get(app.clone(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app, "/api/get-dta?username=octocat").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Not found");
}

#[tokio::test]
async fn test_api_only_without_static_dir() {
    let (status, _) = get(app_for("http://127.0.0.1:9"), "/results").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
