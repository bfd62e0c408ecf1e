//! HTTP surface tests for the advisory, scheme, and chat endpoints

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use agri_server::{
    config::{ChatConfig, Config, ServerConfig},
    create_app, AppState,
};

fn test_state() -> AppState {
    AppState::from_config(Config {
        environment: "test".to_string(),
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        chat: ChatConfig {
            api_key: String::new(),
            model: "gemini-1.5-flash".to_string(),
            endpoint: "http://localhost".to_string(),
        },
    })
}

async fn send_json(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = create_app(test_state());
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (status, body) = send_json(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn advisory_with_empty_snapshot_returns_defaults() {
    let (status, body) =
        send_json(Method::POST, "/api/v1/advisory", Some(json!({"weather": {}}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["irrigation"], "Maintain standard irrigation schedule.");
    assert_eq!(body["protection"], "Routine pest monitoring suggested.");
    assert_eq!(body["soil"], "Soil conditions are stable.");
    assert_eq!(body["fertilizer"], "Conditions are suitable for application.");
}

#[tokio::test]
async fn advisory_without_weather_key_is_a_client_error() {
    let (status, body) = send_json(Method::POST, "/api/v1/advisory", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no weather data provided");
}

#[tokio::test]
async fn advisory_with_mistyped_field_names_the_field() {
    let (status, body) = send_json(
        Method::POST,
        "/api/v1/advisory",
        Some(json!({"weather": {"current": {"temperature": "hot"}}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid weather data");
    assert!(body["details"].as_str().unwrap().contains("temperature"));
}

#[tokio::test]
async fn advisory_rain_priority_over_http() {
    let (status, body) = send_json(
        Method::POST,
        "/api/v1/advisory",
        Some(json!({"weather": {"current": {"temperature": 40, "condition": "rain"}}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["irrigation"].as_str().unwrap().contains("Suspend irrigation"));
}

#[tokio::test]
async fn schemes_endpoint_lists_catalogue() {
    let (status, body) = send_json(Method::GET, "/api/v1/schemes", None).await;
    assert_eq!(status, StatusCode::OK);
    let schemes = body.as_array().unwrap();
    assert!(!schemes.is_empty());
    assert_eq!(schemes[0]["title"], "PM-KISAN");
}

#[tokio::test]
async fn schemes_endpoint_applies_state_filter() {
    let (status, body) =
        send_json(Method::GET, "/api/v1/schemes?state=West%20Bengal", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Krishak Bandhu Scheme"));
    assert!(titles.contains(&"PM-KISAN"));
    assert!(!titles.contains(&"Kerala Subhiksha Keralam"));
}

#[tokio::test]
async fn chat_without_configured_key_reports_configuration_error() {
    let (status, body) = send_json(
        Method::POST,
        "/api/v1/chat",
        Some(json!({"message": "How do I treat leaf rust?"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "configuration error");
}
