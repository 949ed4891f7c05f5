pub mod config;
pub mod rest;

pub use config::{SecurityConfig, ServerConfig};
pub use rest::{AgentsController, RecommendController, create_app};
