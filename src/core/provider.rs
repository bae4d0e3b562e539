//! Provider abstraction for chat completion backends
//!
//! This module defines the error taxonomy shared by every layer and the trait
//! the completion requester talks to.

use crate::models::openai::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use thiserror::Error;

/// Error types for completion operations
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Trait for chat completion backends
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send one non-streaming chat completion request
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
