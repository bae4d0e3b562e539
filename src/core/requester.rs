//! Single-shot completion requests
//!
//! `CompletionRequester` turns a model identifier and a prompt into one chat
//! completion request and returns the text of the first choice.

use crate::core::provider::{CompletionError, Provider};
use crate::models::openai::{ChatCompletionRequest, ChatMessage, display_field};
use std::sync::Arc;
use tracing::{debug, info};

pub struct CompletionRequester {
    provider: Arc<dyn Provider>,
}

impl CompletionRequester {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self { provider }
    }

    /// Build the request sent for `prompt`
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::InvalidRequest` if either input is blank.
    pub fn build_request(model: &str, prompt: &str) -> Result<ChatCompletionRequest, CompletionError> {
        if model.trim().is_empty() {
            return Err(CompletionError::InvalidRequest(
                "model identifier must not be empty".to_string(),
            ));
        }
        if prompt.trim().is_empty() {
            return Err(CompletionError::InvalidRequest(
                "prompt must not be empty".to_string(),
            ));
        }
        Ok(ChatCompletionRequest::new(model, vec![ChatMessage::user(prompt)]))
    }

    /// Request a completion and return the first choice's text
    ///
    /// Makes exactly one attempt; any failure is returned to the caller.
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let request = Self::build_request(model, prompt)?;
        info!(provider = self.provider.provider_name(), model, "requesting completion");

        let response = self.provider.create_chat_completion(&request).await?;
        let content = match response.first_content() {
            Some(content) => content.to_string(),
            None if response.choices.is_empty() => {
                return Err(CompletionError::MalformedResponse(
                    "response contained no choices".to_string(),
                ));
            }
            None => {
                return Err(CompletionError::MalformedResponse(
                    "first choice has no text content".to_string(),
                ));
            }
        };

        let choice = &response.choices[0];
        debug!(
            role = %display_field(&choice.message.role),
            finish_reason = %display_field(&choice.finish_reason),
            chars = content.len(),
            "completion received"
        );
        Ok(content)
    }
}
