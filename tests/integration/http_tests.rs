//! HTTP surface driven through the router without a socket

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use skillhub::chat::{ApiKey, ChatService, OpenAiClient};
use skillhub::config::ChatConfig;
use skillhub::core::skill::InstallTemplate;
use skillhub::server::{self, AppState};
use skillhub::test_utils::{SourceDirFixture, scored_record};

fn seeded() -> SourceDirFixture {
    let fixture = SourceDirFixture::new();
    fixture.write_source(
        "registry.json",
        &json!([
            scored_record("weather-api", "A", "featured", 80.0),
            scored_record("github-helper", "B", "trusted", 95.0),
            scored_record("stock-watch", "C", "community", 60.0),
        ]),
    );
    fixture
}

fn app(fixture: &SourceDirFixture, api_key: Option<ApiKey>, endpoint: &str) -> Router {
    let chat = ChatService::new(
        Arc::new(OpenAiClient::new(endpoint)),
        api_key,
        ChatConfig {
            endpoint: endpoint.to_string(),
            ..ChatConfig::default()
        },
        InstallTemplate::default(),
    );
    server::router(AppState::new(fixture.registry(), chat))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let fixture = seeded();
    let (status, body) = get(app(&fixture, None, "http://127.0.0.1:9"), server::HEALTH_PATH).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_skills_in_catalog_order() {
    let fixture = seeded();
    let (status, body) = get(app(&fixture, None, "http://127.0.0.1:9"), server::SKILLS_PATH).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["weather-api", "github-helper", "stock-watch"]);
}

#[tokio::test]
async fn test_browse_sorts_and_filters() {
    let fixture = seeded();

    let (_, body) = get(app(&fixture, None, "http://127.0.0.1:9"), "/api/skills/browse").await;
    assert_eq!(names(&body), ["github-helper", "weather-api", "stock-watch"]);

    let (_, body) = get(app(&fixture, None, "http://127.0.0.1:9"), "/api/skills/browse?filter=featured").await;
    assert_eq!(names(&body), ["weather-api"]);

    let (_, body) = get(app(&fixture, None, "http://127.0.0.1:9"), "/api/skills/browse?filter=grade-a&q=WEATHER").await;
    assert_eq!(names(&body), ["weather-api"]);

    let (_, body) = get(app(&fixture, None, "http://127.0.0.1:9"), "/api/skills/browse?tier=community").await;
    assert_eq!(names(&body), ["stock-watch"]);
}

#[tokio::test]
async fn test_browse_unknown_filter_is_bad_request() {
    let fixture = seeded();
    let (status, body) = get(app(&fixture, None, "http://127.0.0.1:9"), "/api/skills/browse?filter=bogus").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_categories_partition_catalog() {
    let fixture = seeded();
    let (status, body) = get(app(&fixture, None, "http://127.0.0.1:9"), server::CATEGORIES_PATH).await;
    assert_eq!(status, StatusCode::OK);
    let total: usize = body
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["skills"].as_array().unwrap().len())
        .sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn test_chat_without_credential_returns_notice() {
    let fixture = seeded();
    let (status, body) = post(
        app(&fixture, None, "http://127.0.0.1:9"),
        server::CHAT_PATH,
        r#"{"message": "weather please", "skills": []}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"].as_str().unwrap().starts_with("Chat API key not configured."));
}

#[tokio::test]
async fn test_chat_malformed_body_uses_reply_envelope() {
    let fixture = seeded();
    let (status, body) = post(app(&fixture, None, "http://127.0.0.1:9"), server::CHAT_PATH, "{oops").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["reply"].as_str().unwrap().starts_with("Error: "));
}

#[tokio::test]
async fn test_chat_unreachable_upstream_is_500() {
    let fixture = seeded();
    let (status, body) = post(
        app(&fixture, ApiKey::new("sk-test"), "http://127.0.0.1:9/v1/chat/completions"),
        server::CHAT_PATH,
        r#"{"message": "weather please"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["reply"].as_str().unwrap().starts_with("Error: "));
}
