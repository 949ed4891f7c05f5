//! Gemini provider implementation.
//!
//! Talks to the `generateContent` REST endpoint of the Google Generative
//! Language API with a plain HTTP client. No streaming, no tool calling;
//! the recommendation engine only ever needs one text completion per call.
//!
//! # Example
//!
//! ```rust,ignore
//! use scout_model::gemini::{GeminiConfig, GeminiGenerator};
//!
//! let generator = GeminiGenerator::new(GeminiConfig::new(
//!     std::env::var("GEMINI_API_KEY").unwrap(),
//! ))?;
//! ```

mod client;
mod config;
mod convert;

pub use client::GeminiGenerator;
pub use config::{DEFAULT_MODEL, GEMINI_API_BASE, GeminiConfig};
