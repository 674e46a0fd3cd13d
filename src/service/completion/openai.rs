use crate::entities::chat_completion::{
    ChatCompletionRequest, ChatCompletionResponse, ProviderErrorBody,
};
use crate::service::completion::{CompletionClient, ProviderError};
use crate::utils::config::ProviderConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Client for an OpenAI-compatible chat-completion API.
///
/// Issues exactly one request per call: no retries, no streaming, and the
/// transport's default timeout.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_http(Client::new(), config)
    }

    /// Shares an existing connection pool.
    pub fn with_http(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, message: &str) -> Result<Option<String>, ProviderError> {
        let request = ChatCompletionRequest::single_turn(&self.model, message);

        let mut builder = self.http.post(self.url("/chat/completions")).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(ProviderError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_status(status, &body));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::new(Some(format!("Malformed completion response: {}", e)))
                .with_status(status.as_u16())
                .with_kind("malformed_response")
        })?;

        log::debug!(
            "Completion {} from model {} with {} choice(s)",
            completion.id.as_deref().unwrap_or("-"),
            completion.model.as_deref().unwrap_or(&self.model),
            completion.choices.len()
        );
        let finish_reason = completion.finish_reason().unwrap_or("-");
        if let Some(usage) = completion.usage {
            log::info!(
                "Token usage: prompt={}, completion={}, total={}, finish_reason={}",
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens,
                finish_reason
            );
        }

        Ok(completion.first_content().map(str::to_string))
    }
}

fn error_from_status(status: StatusCode, body: &str) -> ProviderError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(envelope) => {
            let error = ProviderError::new(envelope.error.message).with_status(status.as_u16());
            match envelope.error.kind {
                Some(kind) => error.with_kind(kind),
                None => error,
            }
        }
        // Gateways in front of the provider may answer with HTML or nothing.
        Err(_) => {
            log::debug!("Unparseable provider error body ({}): {}", status, body);
            ProviderError::new(None).with_status(status.as_u16()).with_kind(
                if status.is_server_error() { "server_error" } else { "client_error" },
            )
        }
    }
}
