use crate::entities::ChatResponse;
use crate::error::AppError;
use crate::service::completion::CompletionClient;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Relays one chat message to the completion provider and shapes the reply.
#[derive(Clone)]
pub struct ChatService {
    client: Arc<dyn CompletionClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn reply(&self, message: &str) -> Result<ChatResponse, AppError> {
        let request_id = Uuid::new_v4();
        let start_time = Utc::now();

        log::info!("[{}] Calling completion provider...", request_id);
        log::debug!("[{}] Message length: {} chars", request_id, message.chars().count());

        match self.client.complete(message).await {
            Ok(content) => {
                let response = ChatResponse::now(content);
                let duration = Utc::now() - start_time;
                log::info!(
                    "[{}] Completion provider responded in {}ms",
                    request_id,
                    duration.num_milliseconds()
                );
                log::debug!("[{}] Provider response: {}", request_id, response.message);
                Ok(response)
            }
            Err(err) => {
                let duration = Utc::now() - start_time;
                log::error!(
                    "[{}] Completion provider error after {}ms: {}",
                    request_id,
                    duration.num_milliseconds(),
                    err
                );
                log::error!(
                    "[{}] Error details: message={:?}, status={:?}, type={:?}",
                    request_id,
                    err.message,
                    err.status,
                    err.kind
                );
                Err(AppError::Provider(err))
            }
        }
    }
}
