//! # scout-engine
//!
//! The Agent Scout recommendation pipeline.
//!
//! Given a free-text task description and a catalog of coding agents, the
//! engine analyzes the task, scores every agent against the analysis,
//! justifies each score, and returns the top three ranked candidates:
//!
//! - [`TaskAnalyzer`] - generative or heuristic task analysis
//! - [`score_agent`] - pure, deterministic scoring
//! - [`Justifier`] - generative or template justifications
//! - [`Recommender`] - ties the pipeline together over a shared catalog
//!
//! Generative strategies degrade per call to their deterministic
//! counterparts, so [`Recommender::recommend`] never fails: with no
//! backend, no API key, or a dead network the caller still gets ranked
//! recommendations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scout_core::Catalog;
//! use scout_engine::Recommender;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load("data/agents.json")?);
//! let recommender = Recommender::heuristic(catalog);
//! let result = recommender.recommend("Fix a bug in my Python Flask app").await;
//! ```

pub mod analyzer;
pub mod justify;
pub mod recommender;
pub mod scoring;

pub use analyzer::{GenerativeAnalyzer, HeuristicAnalyzer, TaskAnalyzer};
pub use justify::{GenerativeJustifier, HeuristicJustifier, Justifier};
pub use recommender::{Recommender, TOP_N};
pub use scoring::{MIN_SCORE, score_agent};
