//! # scout-model
//!
//! Text-generation providers for Agent Scout.
//!
//! - [`GeminiGenerator`] - Google's Gemini `generateContent` REST API
//! - [`MockGenerator`] - scripted generator for tests
//!
//! Providers implement [`scout_core::TextGenerator`], the only surface the
//! recommendation engine sees. A provider failure is an ordinary error
//! value; the engine decides what to do with it (it falls back).

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiConfig, GeminiGenerator};
pub use mock::MockGenerator;
