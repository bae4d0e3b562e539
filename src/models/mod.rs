//! API data models
//!
//! This module contains data structures for the OpenAI chat completions API.

pub mod openai;
