use chat_gateway::service::completion::{CompletionClient, OpenAiClient};
use chat_gateway::utils::config::ProviderConfig;
use mockito::Matcher;
use serde_json::json;

fn config(base_url: String, api_key: Option<&str>) -> ProviderConfig {
    ProviderConfig {
        base_url,
        model: "gpt-4o-mini".to_string(),
        api_key_env: "OPENAI_API_KEY".to_string(),
        api_key: api_key.map(str::to_string),
    }
}

fn completion_body(content: serde_json::Value) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 5, "completion_tokens": 2, "total_tokens": 7 }
    })
    .to_string()
}

#[tokio::test]
async fn test_sends_single_user_turn_with_bearer_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "gpt-4o-mini",
            "messages": [{ "role": "user", "content": "Hello there" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(json!("General Kenobi")))
        .expect(1)
        .create_async()
        .await;

    let client = OpenAiClient::new(&config(format!("{}/v1", server.url()), Some("sk-test")));
    let reply = client.complete("Hello there").await.unwrap();

    assert_eq!(reply.as_deref(), Some("General Kenobi"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_content_is_none() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(serde_json::Value::Null))
        .create_async()
        .await;

    let client = OpenAiClient::new(&config(format!("{}/v1", server.url()), Some("sk-test")));
    assert_eq!(client.complete("hi").await.unwrap(), None);
}

#[tokio::test]
async fn test_missing_key_is_rejected_upstream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "You didn't provide an API key.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": null
                }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = OpenAiClient::new(&config(format!("{}/v1", server.url()), None));
    let err = client.complete("hi").await.unwrap_err();

    assert_eq!(err.message.as_deref(), Some("You didn't provide an API key."));
    assert_eq!(err.status, Some(401));
    assert_eq!(err.kind.as_deref(), Some("invalid_request_error"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("<html>upstream unavailable</html>")
        .expect(1)
        .create_async()
        .await;

    let client = OpenAiClient::new(&config(format!("{}/v1", server.url()), Some("sk-test")));
    let err = client.complete("hi").await.unwrap_err();

    assert_eq!(err.status, Some(503));
    assert_eq!(err.to_string(), "Unknown error");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let client = OpenAiClient::new(&config(format!("{}/v1", server.url()), Some("sk-test")));
    let err = client.complete("hi").await.unwrap_err();

    assert_eq!(err.kind.as_deref(), Some("malformed_response"));
    assert_eq!(err.status, Some(200));
    assert!(err.message.unwrap().starts_with("Malformed completion response"));
}

#[tokio::test]
async fn test_connection_failure() {
    // nothing listens on port 1
    let client = OpenAiClient::new(&config("http://127.0.0.1:1/v1".to_string(), Some("sk-test")));
    let err = client.complete("hi").await.unwrap_err();

    assert_eq!(err.kind.as_deref(), Some("connection"));
    assert!(err.status.is_none());
    assert!(err.message.is_some());
}
