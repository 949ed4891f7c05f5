//! # scout-core
//!
//! Foundational types and traits for the Agent Scout recommendation
//! service.
//!
//! - [`AgentRecord`] / [`Catalog`] - the static catalog of coding agents
//! - [`TaskAnalysis`] / [`Complexity`] - structured task understanding
//! - [`RankedAgent`] / [`RecommendationResult`] - recommendation output
//! - [`TextGenerator`] - pluggable text-generation capability
//! - [`ScoutError`] / [`Result`] - unified error handling

pub mod catalog;
pub mod error;
pub mod generate;
pub mod types;

pub use catalog::Catalog;
pub use error::{Result, ScoutError};
pub use generate::TextGenerator;
pub use types::{
    AgentRecord, Complexity, RankedAgent, RecommendationResult, ScoredAgent, TaskAnalysis,
};
