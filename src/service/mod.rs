pub mod chat;
pub mod completion;

pub use chat::ChatService;
pub use completion::{CompletionClient, OpenAiClient, ProviderError};
