//! Logging configuration and initialization
//!
//! This module sets up the tracing subscriber for diagnostic logging. All log
//! output goes to stderr; stdout is reserved for the completion text.

use crate::core::constants::defaults;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Normalize a configured log level into an `EnvFilter` directive
///
/// Only the first word is considered, so trailing comments in `.env` files
/// are tolerated. "warning" maps to "warn" and "critical" to "error"; any
/// other unknown value falls back to the default level.
pub fn normalize_level(log_level: &str) -> &'static str {
    let level = log_level
        .split_whitespace()
        .next()
        .unwrap_or(defaults::LOG_LEVEL)
        .to_lowercase();

    match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        "off" => "off",
        _ => defaults::LOG_LEVEL,
    }
}

/// Initialize the logging system with the specified level
///
/// `RUST_LOG` takes precedence over `log_level` when it is set and valid.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
