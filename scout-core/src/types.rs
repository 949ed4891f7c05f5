use serde::{Deserialize, Serialize};

/// One catalog entry describing an AI coding agent.
///
/// Records are immutable once loaded; every field except `name` exists to be
/// matched against a [`TaskAnalysis`] or echoed back in recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Unique identifier within the catalog.
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub ideal_use_cases: Vec<String>,
    pub supported_languages: Vec<String>,
    pub pricing: String,
    pub website: String,
}

/// Coarse difficulty bucket for a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        };
        f.write_str(label)
    }
}

/// Structured understanding of a free-text task description.
///
/// Produced either by a generative analyzer or by the deterministic
/// heuristics; downstream code cannot tell which. Any value outside the
/// `low`/`medium`/`high` set for `complexity` fails deserialization, which
/// is how malformed generative output gets rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    /// Detected language, or `"unknown"`.
    pub programming_language: String,
    pub task_type: String,
    pub complexity: Complexity,
    pub keywords: Vec<String>,
    pub domain: String,
    pub summary: String,
}

/// An agent paired with its score and justification, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAgent {
    pub agent: AgentRecord,
    pub score: u32,
    pub justification: String,
}

/// One ranked recommendation as it appears on the wire.
///
/// Record fields are denormalized into the response so API clients never
/// need a second catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAgent {
    /// 1-based position in the recommendation list.
    pub rank: u32,
    pub name: String,
    pub description: String,
    pub score: u32,
    pub justification: String,
    pub features: Vec<String>,
    pub supported_languages: Vec<String>,
    pub pricing: String,
    pub website: String,
}

impl RankedAgent {
    pub fn from_scored(rank: u32, scored: ScoredAgent) -> Self {
        let ScoredAgent { agent, score, justification } = scored;
        Self {
            rank,
            name: agent.name,
            description: agent.description,
            score,
            justification,
            features: agent.features,
            supported_languages: agent.supported_languages,
            pricing: agent.pricing,
            website: agent.website,
        }
    }
}

/// Full output of one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub task_analysis: TaskAnalysis,
    pub agents: Vec<RankedAgent>,
}
