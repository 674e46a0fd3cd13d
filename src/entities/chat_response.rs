use async_graphql::SimpleObject;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Substituted when the provider returns no completion text.
pub const NO_RESPONSE: &str = "No response";

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ChatResponse {
    pub message: String,
    /// ISO-8601 UTC instant, millisecond precision.
    pub timestamp: String,
}

impl ChatResponse {
    /// Stamps the reply with the current instant.
    pub fn now(message: Option<String>) -> Self {
        Self {
            message: message.unwrap_or_else(|| NO_RESPONSE.to_string()),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
