//! OpenAI chat completions client
//!
//! This module provides an async HTTP client for OpenAI-compatible chat
//! completion endpoints. It sends exactly one request per call and maps every
//! failure into a `CompletionError`; there is no retry.

use crate::core::config::Config;
use crate::core::constants::{CHAT_COMPLETIONS_PATH, header};
use crate::core::provider::{CompletionError, Provider};
use crate::models::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ErrorResponse, display_field,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI async client
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    organization: Option<String>,
    project: Option<String>,
}

impl OpenAIClient {
    /// Create a new OpenAI client
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `base_url` - API base URL, e.g. `https://api.openai.com/v1`
    /// * `timeout` - Optional request timeout; `None` keeps reqwest's default
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Network` if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CompletionError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            organization: None,
            project: None,
        })
    }

    /// Create a client from resolved application configuration
    pub fn from_config(config: &Config) -> Result<Self, CompletionError> {
        Ok(Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.request_timeout,
        )?
        .with_organization(config.organization.clone())
        .with_project(config.project.clone()))
    }

    /// Send the `OpenAI-Organization` header with every request
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization;
        self
    }

    /// Send the `OpenAI-Project` header with every request
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, CHAT_COMPLETIONS_PATH)
    }

    /// Pull the human-readable message out of an error body
    ///
    /// OpenAI wraps errors as `{"error": {"message": ..., "code": ...}}`;
    /// anything else is returned verbatim.
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) if parsed.error.code.is_null() => parsed.error.message,
            Ok(parsed) => format!(
                "{} [{}]",
                parsed.error.message,
                display_field(&parsed.error.code)
            ),
            Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }

    /// Classify OpenAI errors and provide helpful messages
    fn classify_error(error_detail: &str) -> String {
        let error_lower = error_detail.to_lowercase();

        if error_lower.contains("unsupported_country_region_territory")
            || error_lower.contains("country, region, or territory not supported")
        {
            return format!(
                "{} (the OpenAI API is not available in your region)",
                error_detail
            );
        }

        if error_lower.contains("invalid_api_key") || error_lower.contains("incorrect api key") {
            return format!("{} (check OPENAI_API_KEY)", error_detail);
        }

        if error_lower.contains("insufficient_quota") || error_lower.contains("quota") {
            return format!("{} (check your plan and billing details)", error_detail);
        }

        if error_lower.contains("model")
            && (error_lower.contains("not found") || error_lower.contains("does not exist"))
        {
            return format!("{} (check OPENAI_MODEL)", error_detail);
        }

        error_detail.to_string()
    }

    fn status_error(status: StatusCode, body: &str) -> CompletionError {
        let message = Self::classify_error(&Self::error_message(body));
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CompletionError::Authentication(message)
            }
            _ => CompletionError::Service {
                status: status.as_u16(),
                message,
            },
        }
    }

    fn transport_error(error: reqwest::Error) -> CompletionError {
        let error = error.without_url();
        if error.is_timeout() {
            CompletionError::Network(format!("request timed out: {}", error))
        } else if error.is_connect() {
            CompletionError::Network(format!("failed to connect: {}", error))
        } else {
            CompletionError::Network(error.to_string())
        }
    }

    /// Send chat completion to the OpenAI API
    ///
    /// # Errors
    ///
    /// Returns `Authentication` for 401/403, `Service` for any other
    /// non-success status, `Network` for transport failures and
    /// `MalformedResponse` if the body is not a chat completion.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.endpoint();
        debug!(%url, model = %request.model, messages = request.messages.len(), "sending chat completion");

        let mut req_builder = self.client.post(&url).bearer_auth(&self.api_key);
        if let Some(organization) = &self.organization {
            req_builder = req_builder.header(header::ORGANIZATION, organization);
        }
        if let Some(project) = &self.project {
            req_builder = req_builder.header(header::PROJECT, project);
        }

        let response = req_builder
            .json(request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::transport_error)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "chat completion request failed");
            return Err(Self::status_error(status, &body));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

        debug!(
            id = %display_field(&completion.id),
            model = %display_field(&completion.model),
            choices = completion.choices.len(),
            prompt_tokens = ?completion.usage_tokens("prompt_tokens"),
            completion_tokens = ?completion.usage_tokens("completion_tokens"),
            total_tokens = ?completion.usage_tokens("total_tokens"),
            "received chat completion"
        );

        Ok(completion)
    }
}

#[async_trait]
impl Provider for OpenAIClient {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        OpenAIClient::create_chat_completion(self, request).await
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}
