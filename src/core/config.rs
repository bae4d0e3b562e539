//! Application configuration management
//!
//! This module resolves configuration from environment variables. All values
//! are resolved and validated once at startup; nothing downstream reads the
//! process environment.

use crate::core::constants::{defaults, env};
use crate::core::provider::CompletionError;
use std::env::VarError;
use std::time::Duration;

/// Application configuration resolved from the environment
#[derive(Clone)]
pub struct Config {
    /// API credential sent as a bearer token
    pub api_key: String,

    /// Chat completions API base URL
    pub base_url: String,

    /// Optional `OpenAI-Organization` header value
    pub organization: Option<String>,

    /// Optional `OpenAI-Project` header value
    pub project: Option<String>,

    /// Model identifier sent with the request
    pub model: String,

    /// Prompt sent as the single user message
    pub prompt: String,

    /// Request timeout; `None` leaves the HTTP client default in place
    pub request_timeout: Option<Duration>,

    /// Logging level
    pub log_level: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Authentication` if `OPENAI_API_KEY` is unset
    /// or blank, and `CompletionError::Config` if a value is not valid unicode
    /// or an optional value is invalid.
    pub fn from_env() -> Result<Self, CompletionError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Resolve configuration through an arbitrary variable lookup
    ///
    /// Blank values are treated as unset. Settings are trimmed except for the
    /// prompt, which is sent exactly as given.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompletionError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let get_raw = |key: &str| match lookup(key) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(CompletionError::Config(format!(
                "{} is set but is not valid unicode",
                key
            ))),
        };
        let get = |key: &str| {
            get_raw(key).map(|value| value.map(|value| value.trim().to_string()))
        };

        let api_key = get(env::API_KEY)?.ok_or_else(|| {
            CompletionError::Authentication(format!(
                "{} is not set; export it or add it to .env",
                env::API_KEY
            ))
        })?;

        let request_timeout = match get(env::REQUEST_TIMEOUT)? {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Config {
            api_key,
            base_url: get(env::BASE_URL)?.unwrap_or_else(|| defaults::BASE_URL.to_string()),
            organization: get(env::ORGANIZATION)?,
            project: get(env::PROJECT)?,
            model: get(env::MODEL)?.unwrap_or_else(|| defaults::MODEL.to_string()),
            prompt: get_raw(env::PROMPT)?.unwrap_or_else(|| defaults::PROMPT.to_string()),
            request_timeout,
            log_level: get(env::LOG_LEVEL)?.unwrap_or_else(|| defaults::LOG_LEVEL.to_string()),
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, CompletionError> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => Err(CompletionError::Config(format!(
            "{} must be a positive number of seconds, got {:?}",
            env::REQUEST_TIMEOUT,
            raw
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn load(vars: &[(&str, &str)]) -> Result<Config, CompletionError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned().ok_or(VarError::NotPresent))
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("OPENAI_API_KEY", "sk-test123")]).unwrap();
        assert_eq!(config.api_key, "sk-test123");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(
            config.prompt,
            "Write a one-sentence bedtime story about a unicorn."
        );
        assert!(config.organization.is_none());
        assert!(config.project.is_none());
        assert!(config.request_timeout.is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("OPENAI_API_KEY", "sk-test123"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1"),
            ("OPENAI_ORG_ID", "org-abc"),
            ("OPENAI_PROJECT_ID", "proj-xyz"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("PROMPT", "Say hi."),
            ("REQUEST_TIMEOUT", "30"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.organization.as_deref(), Some("org-abc"));
        assert_eq!(config.project.as_deref(), Some("proj-xyz"));
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.prompt, "Say hi.");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_api_key() {
        let err = load(&[("OPENAI_MODEL", "gpt-4o")]).unwrap_err();
        assert!(matches!(err, CompletionError::Authentication(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_blank_api_key() {
        let err = load(&[("OPENAI_API_KEY", "   ")]).unwrap_err();
        assert!(matches!(err, CompletionError::Authentication(_)));
    }

    #[test]
    fn test_blank_optional_values_use_defaults() {
        let config = load(&[("OPENAI_API_KEY", "sk-test"), ("OPENAI_MODEL", "")]).unwrap();
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_invalid_timeout() {
        for raw in ["soon", "0", "-5"] {
            let err = load(&[("OPENAI_API_KEY", "sk-test"), ("REQUEST_TIMEOUT", raw)]).unwrap_err();
            assert!(matches!(err, CompletionError::Config(_)), "{raw}");
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = load(&[("OPENAI_API_KEY", "sk-secret")]).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_prompt_whitespace_is_preserved() {
        let prompt = "  Continue this poem:\n  roses are red\n";
        let config = load(&[("OPENAI_API_KEY", " sk-test "), ("PROMPT", prompt)]).unwrap();
        assert_eq!(config.prompt, prompt);
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn test_blank_prompt_uses_default() {
        let config = load(&[("OPENAI_API_KEY", "sk-test"), ("PROMPT", " \n ")]).unwrap();
        assert_eq!(config.prompt, defaults::PROMPT);
    }

    #[test]
    fn test_non_unicode_api_key_is_reported() {
        let err = Config::from_lookup(|key| match key {
            "OPENAI_API_KEY" => Err(VarError::NotUnicode(OsString::from("sk-bad"))),
            _ => Err(VarError::NotPresent),
        })
        .unwrap_err();
        assert!(matches!(err, CompletionError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("OPENAI_API_KEY"));
        assert!(message.contains("unicode"));
        assert!(!message.contains("not set"));
    }
}
