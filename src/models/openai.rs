//! OpenAI API data models
//!
//! This module defines the request and response structures for the OpenAI
//! chat completions API. Only the fields this program reads are modelled;
//! everything else in a response body is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Chat message sent in a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// OpenAI chat completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

/// OpenAI chat completion response
///
/// Only `choices[*].message.content` is typed strictly. The remaining fields
/// are kept as raw JSON because they are only logged, and compatible
/// backends fill them with nulls or differently typed values.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub model: Value,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Value,
}

impl ChatCompletionResponse {
    /// Text content of the first choice, if the service returned one
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }

    /// A token counter from `usage`, if present and a non-negative integer
    pub fn usage_tokens(&self, counter: &str) -> Option<u64> {
        self.usage.get(counter)?.as_u64()
    }
}

/// OpenAI choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Value,
}

/// Assistant message inside a choice
///
/// `content` is nullable on the wire (refusals, tool calls).
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Value,
    #[serde(default)]
    pub content: Option<String>,
}

/// Render a loosely typed response field for log output
pub fn display_field(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default)]
    pub code: Value,
}
