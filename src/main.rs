//! One-shot chat completion
//!
//! Sends a single prompt to an OpenAI-compatible chat completions endpoint
//! and prints the text of the first returned choice to stdout.

mod core;
mod models;

use crate::core::client::OpenAIClient;
use crate::core::config::Config;
use crate::core::constants::{defaults, env};
use crate::core::logging::init_logging;
use crate::core::requester::CompletionRequester;
use anyhow::{Context, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // A missing .env file is not an error
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    if let Err(e) = run(&config, &mut std::io::stdout()).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Request one completion and write it to `out` as a single line
///
/// Nothing is written unless the completion succeeds.
async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let client = OpenAIClient::from_config(config).context("Failed to initialize client")?;
    let requester = CompletionRequester::new(Arc::new(client));

    let text = requester
        .complete(&config.model, &config.prompt)
        .await
        .with_context(|| format!("Chat completion with model {} failed", config.model))?;

    writeln!(out, "{}", text).context("Failed to write completion")?;
    out.flush().context("Failed to write completion")?;
    Ok(())
}

/// Print help message
fn print_help() {
    println!("chat-oneshot v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Sends one prompt to a chat completions endpoint and prints the reply.");
    println!();
    println!("Usage: chat-oneshot [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables (a .env file in the working directory is loaded first):");
    println!("  {} - Your API key (required)", env::API_KEY);
    println!("  {} - API base URL (default: {})", env::BASE_URL, defaults::BASE_URL);
    println!("  {} - Organization ID header", env::ORGANIZATION);
    println!("  {} - Project ID header", env::PROJECT);
    println!("  {} - Model identifier (default: {})", env::MODEL, defaults::MODEL);
    println!("  {} - Prompt text (default: {:?})", env::PROMPT, defaults::PROMPT);
    println!("  {} - Request timeout in seconds (default: none)", env::REQUEST_TIMEOUT);
    println!("  {} - Logging level (default: {})", env::LOG_LEVEL, defaults::LOG_LEVEL);
}
