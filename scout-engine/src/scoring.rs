//! Agent scoring against a task analysis.
//!
//! Pure integer arithmetic over case-insensitive string matching. Scores
//! are unbounded above and floored at [`MIN_SCORE`], so even a complete
//! mismatch stays rankable.

use scout_core::{AgentRecord, Complexity, TaskAnalysis};

/// Bonus for supporting the detected programming language.
pub const LANGUAGE_BONUS: u32 = 2;
/// Bonus when the task type and an ideal use case overlap. Granted at most
/// once per agent.
pub const TASK_TYPE_BONUS: u32 = 3;
/// Bonus per analysis keyword found among the agent's features.
pub const KEYWORD_BONUS: u32 = 1;
/// Bonus when the task domain appears in the agent's ideal use cases.
pub const DOMAIN_BONUS: u32 = 2;
/// Bonus for the complexity fit checks (enterprise features on high
/// complexity, beginner-friendly description on low complexity).
pub const COMPLEXITY_BONUS: u32 = 1;
/// Minimum score an agent can receive.
pub const MIN_SCORE: u32 = 1;

/// Feature tag that marks an agent as enterprise-grade. Matched as an exact
/// list entry, not a substring.
const ENTERPRISE_TAG: &str = "enterprise";

/// Score one agent against a task analysis.
pub fn score_agent(agent: &AgentRecord, analysis: &TaskAnalysis) -> u32 {
    let mut score = 0;

    if supports_language(agent, &analysis.programming_language) {
        score += LANGUAGE_BONUS;
    }

    // Task type and use case match in either direction; first hit wins.
    let task_type = analysis.task_type.to_lowercase();
    for use_case in &agent.ideal_use_cases {
        let use_case = use_case.to_lowercase();
        if use_case.contains(&task_type) || task_type.contains(&use_case) {
            score += TASK_TYPE_BONUS;
            break;
        }
    }

    let features = agent.features.join(" ").to_lowercase();
    for keyword in &analysis.keywords {
        if features.contains(&keyword.to_lowercase()) {
            score += KEYWORD_BONUS;
        }
    }

    let use_cases = agent.ideal_use_cases.join(" ").to_lowercase();
    if use_cases.contains(&analysis.domain.to_lowercase()) {
        score += DOMAIN_BONUS;
    }

    match analysis.complexity {
        Complexity::High if agent.features.iter().any(|f| f == ENTERPRISE_TAG) => {
            score += COMPLEXITY_BONUS;
        }
        Complexity::Low if agent.description.to_lowercase().contains("beginner") => {
            score += COMPLEXITY_BONUS;
        }
        _ => {}
    }

    score.max(MIN_SCORE)
}

/// Case-insensitive check that the agent lists the detected language.
pub(crate) fn supports_language(agent: &AgentRecord, language: &str) -> bool {
    agent.supported_languages.iter().any(|lang| lang.eq_ignore_ascii_case(language))
}
