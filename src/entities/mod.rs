pub mod chat_completion;
pub mod chat_completion_message;
pub mod chat_response;

pub use chat_completion::{ChatCompletionRequest, ChatCompletionResponse};
pub use chat_completion_message::ChatCompletionMessage;
pub use chat_response::{ChatResponse, NO_RESPONSE};
