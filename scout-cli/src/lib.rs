//! # scout-cli
//!
//! Command-line launcher for Agent Scout.
//!
//! Two modes:
//!
//! - **Serve**: HTTP API server for the recommendation engine
//! - **Recommend**: one-shot recommendation printed as JSON
//!
//! ```bash
//! # Start the API server
//! scout serve --port 5000
//!
//! # Single recommendation from the terminal
//! scout recommend "Fix a bug in my Python Flask application"
//! ```

pub mod cli;
pub mod launcher;
pub mod recommend;
pub mod serve;
pub mod telemetry;

pub use cli::{Cli, Commands};
pub use launcher::build_recommender;
