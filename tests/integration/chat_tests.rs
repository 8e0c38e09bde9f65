//! Completion client against a mock endpoint

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use skillhub::HubError;
use skillhub::chat::{
    ApiKey, ChatRequest, ChatService, CompletionClient, ContextEntry, FALLBACK_REPLY, OpenAiClient,
};
use skillhub::config::ChatConfig;
use skillhub::core::skill::InstallTemplate;

fn service(server: &MockServer, key: Option<ApiKey>) -> ChatService {
    let endpoint = server.url("/v1/chat/completions");
    ChatService::new(
        Arc::new(OpenAiClient::new(endpoint.clone())),
        key,
        ChatConfig {
            endpoint,
            ..ChatConfig::default()
        },
        InstallTemplate::default(),
    )
}

fn request() -> ChatRequest {
    ChatRequest::new(
        "I need weather data",
        vec![ContextEntry {
            name: "weather-api".to_string(),
            description: Some("Forecasts".to_string()),
            install_cmd: None,
        }],
    )
}

#[tokio::test]
async fn test_reply_comes_from_first_choice() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test");
            then.status(200).json_body(json!({
                "choices": [{"message": {"role": "assistant", "content": "Try weather-api"}}]
            }));
        })
        .await;

    let reply = service(&server, ApiKey::new("sk-test")).reply(&request()).await.unwrap();
    assert_eq!(reply, "Try weather-api");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_choice_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({"choices": []}));
        })
        .await;

    let reply = service(&server, ApiKey::new("sk-test")).reply(&request()).await.unwrap();
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_error_status_with_json_body_uses_fallback() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(401).json_body(json!({"error": {"message": "bad key"}}));
        })
        .await;

    let reply = service(&server, ApiKey::new("sk-bad")).reply(&request()).await.unwrap();
    assert_eq!(reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn test_non_json_body_is_upstream_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(502).body("<html>bad gateway</html>");
        })
        .await;

    let err = service(&server, ApiKey::new("sk-test")).reply(&request()).await.unwrap_err();
    assert!(matches!(err, HubError::UpstreamFailure(_)));
}

#[tokio::test]
async fn test_missing_credential_never_calls_upstream() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.any_request();
            then.status(200).json_body(json!({}));
        })
        .await;

    let reply = service(&server, None).reply(&request()).await.unwrap();
    assert!(reply.contains("OPENAI_API_KEY"));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_client_sends_model_and_messages() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200)
                .json_body(json!({"choices": [{"message": {"content": "ok"}}]}));
        })
        .await;

    let svc = service(&server, None);
    let completion = svc.build_request(&request());
    assert_eq!(completion.model, "gpt-4o-mini");
    assert_eq!(completion.max_tokens, 500);
    assert_eq!(completion.messages.len(), 2);
    assert!(completion.messages[0].content.contains("- **weather-api**: Forecasts"));
    assert_eq!(completion.messages[1].content, "I need weather data");
    let client = OpenAiClient::new(server.url("/v1/chat/completions"));
    let key = ApiKey::new("sk-test").unwrap();
    let reply = client.complete(&key, &completion).await.unwrap();
    assert_eq!(reply.as_deref(), Some("ok"));
    mock.assert_async().await;
}
