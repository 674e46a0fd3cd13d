use serde::Serialize;

pub const USER_ROLE: &str = "user";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

impl ChatCompletionMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: USER_ROLE.to_string(), content: content.into() }
    }
}
