//! Justification strategies for scored agents.
//!
//! Mirrors the analyzer split: a generative strategy asks the backend for
//! prose and a deterministic strategy assembles clauses from the same
//! matches the scorer rewards. Both always return a sentence.

use std::sync::Arc;

use async_trait::async_trait;
use scout_core::{AgentRecord, TaskAnalysis, TextGenerator};

use crate::scoring::supports_language;

/// Produces a short explanation of why an agent fits a task.
#[async_trait]
pub trait Justifier: Send + Sync {
    async fn justify(&self, agent: &AgentRecord, analysis: &TaskAnalysis, score: u32) -> String;
}

/// Deterministic template justification.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicJustifier;

impl HeuristicJustifier {
    pub fn new() -> Self {
        Self
    }

    /// Pure synchronous justification; the trait impl delegates here.
    pub fn justify_text(
        &self,
        agent: &AgentRecord,
        analysis: &TaskAnalysis,
        score: u32,
    ) -> String {
        let mut clauses = Vec::new();

        if supports_language(agent, &analysis.programming_language) {
            clauses.push(format!("supports {} development", analysis.programming_language));
        }

        // Unlike the scorer, this check is one-directional: the task type
        // has to appear inside a use case for it to be worth quoting.
        let task_type = analysis.task_type.to_lowercase();
        if let Some(use_case) =
            agent.ideal_use_cases.iter().find(|use_case| use_case.to_lowercase().contains(&task_type))
        {
            clauses.push(format!("excels at {}", use_case));
        }

        if !agent.features.is_empty() {
            let highlights: Vec<&str> =
                agent.features.iter().take(2).map(String::as_str).collect();
            clauses.push(format!("offers {}", highlights.join(", ")));
        }

        if clauses.is_empty() {
            format!(
                "{} is a solid choice for this task with its comprehensive coding assistance features. (Score: {})",
                agent.name, score
            )
        } else {
            format!(
                "{} is recommended because it {}. (Score: {})",
                agent.name,
                clauses.join(" and "),
                score
            )
        }
    }
}

#[async_trait]
impl Justifier for HeuristicJustifier {
    async fn justify(&self, agent: &AgentRecord, analysis: &TaskAnalysis, score: u32) -> String {
        self.justify_text(agent, analysis, score)
    }
}

/// Justifier backed by a [`TextGenerator`], with [`HeuristicJustifier`] as
/// its fallback. One generation call per scored agent, no retries; a
/// failure for one agent never affects the others.
pub struct GenerativeJustifier {
    generator: Arc<dyn TextGenerator>,
    fallback: HeuristicJustifier,
}

impl GenerativeJustifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator, fallback: HeuristicJustifier::new() }
    }

    fn build_prompt(agent: &AgentRecord, analysis: &TaskAnalysis, score: u32) -> String {
        format!(
            r#"Generate a concise 2-3 sentence justification for why this AI coding agent is recommended for the given task.

Agent: {}
Agent Description: {}
Agent Features: {}
Agent Ideal Use Cases: {}
Agent Supported Languages: {}

Task Analysis:
- Programming Language: {}
- Task Type: {}
- Complexity: {}
- Domain: {}
- Summary: {}

Score: {}/10

Write a clear, specific justification explaining why this agent is well-suited for this task. Focus on concrete matches between the agent's capabilities and the task requirements."#,
            agent.name,
            agent.description,
            agent.features.join(", "),
            agent.ideal_use_cases.join(", "),
            agent.supported_languages.join(", "),
            analysis.programming_language,
            analysis.task_type,
            analysis.complexity,
            analysis.domain,
            analysis.summary,
            score
        )
    }
}

#[async_trait]
impl Justifier for GenerativeJustifier {
    async fn justify(&self, agent: &AgentRecord, analysis: &TaskAnalysis, score: u32) -> String {
        match self.generator.generate(&Self::build_prompt(agent, analysis, score)).await {
            Ok(reply) => reply.trim().to_string(),
            Err(err) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    agent = %agent.name,
                    error = %err,
                    "justification generation failed, using template justification"
                );
                self.fallback.justify_text(agent, analysis, score)
            }
        }
    }
}
