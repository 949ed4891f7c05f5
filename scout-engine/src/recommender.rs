//! Recommendation pipeline: analyze, score, justify, rank.

use std::sync::Arc;

use futures::future::join_all;
use scout_core::{
    AgentRecord, Catalog, RankedAgent, RecommendationResult, ScoredAgent, TextGenerator,
};

use crate::analyzer::{GenerativeAnalyzer, HeuristicAnalyzer, TaskAnalyzer};
use crate::justify::{GenerativeJustifier, HeuristicJustifier, Justifier};
use crate::scoring::score_agent;

/// Number of agents returned per request.
pub const TOP_N: usize = 3;

/// The recommendation engine: one catalog plus an analysis strategy and a
/// justification strategy, chosen once at construction.
///
/// `recommend` is total with respect to generation failures. The worst case
/// is a fully deterministic result, never an error, so callers can hold the
/// engine behind an `Arc` and share it across requests without any failure
/// handling of their own.
pub struct Recommender {
    catalog: Arc<Catalog>,
    analyzer: Arc<dyn TaskAnalyzer>,
    justifier: Arc<dyn Justifier>,
}

impl Recommender {
    /// Engine with deterministic strategies only.
    pub fn heuristic(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            analyzer: Arc::new(HeuristicAnalyzer::new()),
            justifier: Arc::new(HeuristicJustifier::new()),
        }
    }

    /// Engine with generative strategies backed by `generator`. Each call
    /// still falls back to the deterministic path when generation fails.
    pub fn generative(catalog: Arc<Catalog>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            catalog,
            analyzer: Arc::new(GenerativeAnalyzer::new(generator.clone())),
            justifier: Arc::new(GenerativeJustifier::new(generator)),
        }
    }

    /// Engine with explicit strategies.
    pub fn with_strategies(
        catalog: Arc<Catalog>,
        analyzer: Arc<dyn TaskAnalyzer>,
        justifier: Arc<dyn Justifier>,
    ) -> Self {
        Self { catalog, analyzer, justifier }
    }

    /// All catalog entries, in catalog order.
    pub fn agents(&self) -> &[AgentRecord] {
        self.catalog.agents()
    }

    /// Produce the top recommendations for a task description.
    ///
    /// Callers validate that the description is nonempty before calling;
    /// the engine itself accepts any string.
    pub async fn recommend(&self, task_description: &str) -> RecommendationResult {
        let analysis = self.analyzer.analyze(task_description).await;

        // Justifications run concurrently; join_all keeps catalog order.
        let mut scored: Vec<ScoredAgent> =
            join_all(self.catalog.agents().iter().map(|agent| {
                let analysis = &analysis;
                async move {
                    let score = score_agent(agent, analysis);
                    let justification = self.justifier.justify(agent, analysis, score).await;
                    ScoredAgent { agent: agent.clone(), score, justification }
                }
            }))
            .await;

        // Stable sort: equal scores keep catalog order.
        scored.sort_by_key(|s| std::cmp::Reverse(s.score));

        let agents: Vec<RankedAgent> = scored
            .into_iter()
            .take(TOP_N)
            .enumerate()
            .map(|(index, scored)| RankedAgent::from_scored(index as u32 + 1, scored))
            .collect();

        tracing::debug!(
            language = %analysis.programming_language,
            task_type = %analysis.task_type,
            returned = agents.len(),
            "ranked recommendations"
        );

        RecommendationResult { task_analysis: analysis, agents }
    }
}
