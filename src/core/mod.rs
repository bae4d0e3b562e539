//! Core application modules
//!
//! This module contains configuration, constants, logging, the HTTP client
//! and the completion requester.

pub mod client;
pub mod config;
pub mod constants;
pub mod logging;
pub mod provider;
pub mod requester;

#[cfg(test)]
pub mod mock_server;
