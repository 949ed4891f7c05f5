//! Builds the recommendation pipeline from the environment.

use std::sync::Arc;

use scout_core::{Catalog, TextGenerator};
use scout_engine::Recommender;
use scout_model::GeminiGenerator;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Build a recommender for the catalog.
///
/// When `GEMINI_API_KEY` is set, analysis and justifications are generated
/// by Gemini with heuristic fallback; otherwise the pipeline is purely
/// heuristic.
pub fn build_recommender(catalog: Arc<Catalog>) -> Recommender {
    match std::env::var(GEMINI_API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => match GeminiGenerator::flash(key) {
            Ok(generator) => {
                tracing::info!(generator = generator.name(), "using generative analysis");
                Recommender::generative(catalog, Arc::new(generator))
            }
            Err(error) => {
                tracing::warn!(%error, "failed to build Gemini client, using heuristic analysis");
                Recommender::heuristic(catalog)
            }
        },
        _ => {
            tracing::warn!(
                "{} not set, recommendations will use heuristic analysis only",
                GEMINI_API_KEY_VAR
            );
            Recommender::heuristic(catalog)
        }
    }
}
