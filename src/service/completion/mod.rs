//! Completion provider seam.
//!
//! The resolver only sees [`CompletionClient`], so the upstream provider can
//! be swapped for a test double without touching schema code.

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiClient;

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Any failure of a completion call: transport, authentication, non-2xx
/// status or an unexpected response shape.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or(UNKNOWN_ERROR))]
pub struct ProviderError {
    pub message: Option<String>,
    pub status: Option<u16>,
    /// Provider error `type`, or a transport category.
    pub kind: Option<String>,
}

impl ProviderError {
    /// An empty message counts as none, so it displays as `Unknown error`.
    pub fn new(message: Option<String>) -> Self {
        Self { message: message.filter(|m| !m.is_empty()), ..Default::default() }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connection"
        } else if err.is_decode() {
            "decode"
        } else {
            "request"
        };
        let error = ProviderError::new(Some(err.to_string())).with_kind(kind);
        match err.status() {
            Some(status) => error.with_status(status.as_u16()),
            None => error,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends `message` as a single user turn and returns the first
    /// completion's text, or `None` when the provider produced none.
    async fn complete(&self, message: &str) -> Result<Option<String>, ProviderError>;
}
