use crate::service::completion::ProviderError;
use crate::utils::config::ConfigError;
use async_graphql::ErrorExtensions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to get response from AI: {0}")]
    Provider(#[from] ProviderError),
    #[error("Validation error: {0}")]
    Validation(ValidationDetails),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("Not Found")]
    NotFound,
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("Timeout error: {0}")]
    Timeout(String),
    #[error("Generic error: {0}")]
    Generic(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationDetails {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field: {}, Message: {}", self.field, self.message)
    }
}

impl AppError {
    /// Stable machine-readable code, exposed as the `code` extension of
    /// GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Provider(_) => "PROVIDER_ERROR",
            AppError::Validation(_) => "BAD_REQUEST",
            AppError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            AppError::NotFound => "NOT_FOUND",
            AppError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            AppError::Timeout(_) => "TIMEOUT",
            AppError::Io(_) | AppError::Anyhow(_) | AppError::Config(_) | AppError::Generic(_) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }
}

// Only the message and code leave the process; provider status and error
// type are logged by the resolver instead.
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
