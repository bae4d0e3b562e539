//! Constants for defaults, environment variable names and HTTP headers
//!
//! Every environment variable the program reads is named here so that
//! `--help` output and configuration loading stay in sync.

/// Built-in request defaults
pub mod defaults {
    /// OpenAI API base URL
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Model used when `OPENAI_MODEL` is unset
    pub const MODEL: &str = "gpt-3.5-turbo";

    /// Prompt used when `PROMPT` is unset
    pub const PROMPT: &str = "Write a one-sentence bedtime story about a unicorn.";

    /// Log level used when `LOG_LEVEL` is unset or invalid
    pub const LOG_LEVEL: &str = "warn";
}

/// Environment variable names
pub mod env {
    /// API credential (required)
    pub const API_KEY: &str = "OPENAI_API_KEY";

    /// API base URL
    pub const BASE_URL: &str = "OPENAI_BASE_URL";

    /// Organization header value
    pub const ORGANIZATION: &str = "OPENAI_ORG_ID";

    /// Project header value
    pub const PROJECT: &str = "OPENAI_PROJECT_ID";

    /// Model identifier
    pub const MODEL: &str = "OPENAI_MODEL";

    /// Prompt text
    pub const PROMPT: &str = "PROMPT";

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";

    /// Logging level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// HTTP header names
pub mod header {
    /// Organization header
    pub const ORGANIZATION: &str = "OpenAI-Organization";

    /// Project header
    pub const PROJECT: &str = "OpenAI-Project";
}

/// Endpoint path, relative to the base URL
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
