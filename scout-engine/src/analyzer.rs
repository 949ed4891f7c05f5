//! Task analysis strategies.
//!
//! A [`TaskAnalyzer`] turns a free-text task description into a
//! [`TaskAnalysis`]. The generative strategy asks a [`TextGenerator`] for a
//! JSON analysis and falls back to keyword heuristics on any failure, so
//! analysis as a whole never errors.

use std::sync::Arc;

use async_trait::async_trait;
use scout_core::{Complexity, TaskAnalysis, TextGenerator};

/// Ordered keyword table for language detection. The first matching row
/// wins, so `javascript` sits before `java` (which is a substring of it).
const LANGUAGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("python", &["python", "py", "django", "flask", "pandas", "numpy"]),
    ("javascript", &["javascript", "js", "react", "vue", "angular", "node"]),
    ("java", &["java", "spring", "maven", "gradle"]),
    ("c++", &["c++", "cpp", "cmake"]),
    ("html", &["html", "css", "frontend", "ui"]),
    ("sql", &["sql", "database", "mysql", "postgres"]),
];

/// Ordered keyword table for task type detection, first match wins.
const TASK_TYPE_KEYWORDS: &[(&str, &[&str])] = &[
    ("bug fix", &["bug", "fix", "error", "debug"]),
    ("testing", &["test", "testing", "unit test", "integration"]),
    ("refactoring", &["refactor", "clean up", "optimize", "improve"]),
    ("feature development", &["feature", "implement", "create", "build", "develop"]),
];

const DEFAULT_LANGUAGE: &str = "unknown";
const DEFAULT_TASK_TYPE: &str = "general development";
const DEFAULT_DOMAIN: &str = "general";
const MAX_KEYWORDS: usize = 5;
const MAX_SUMMARY_CHARS: usize = 100;

/// Turns a task description into a structured analysis.
///
/// Total by construction: implementations absorb their own failures and
/// always hand back a usable analysis. Input validation (rejecting empty
/// descriptions) happens at the API boundary, not here.
#[async_trait]
pub trait TaskAnalyzer: Send + Sync {
    async fn analyze(&self, description: &str) -> TaskAnalysis;
}

/// Deterministic keyword-based analyzer. Used on its own when no generative
/// backend is configured, and as the fallback when one fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Pure synchronous analysis; the trait impl delegates here.
    pub fn analyze_text(&self, description: &str) -> TaskAnalysis {
        let lowered = description.to_lowercase();

        let programming_language = LANGUAGE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(DEFAULT_LANGUAGE, |(language, _)| language)
            .to_string();

        let task_type = TASK_TYPE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map_or(DEFAULT_TASK_TYPE, |(task_type, _)| task_type)
            .to_string();

        let keywords = lowered.split_whitespace().take(MAX_KEYWORDS).map(str::to_string).collect();

        TaskAnalysis {
            programming_language,
            task_type,
            complexity: Complexity::Medium,
            keywords,
            domain: DEFAULT_DOMAIN.to_string(),
            summary: summarize(description),
        }
    }
}

#[async_trait]
impl TaskAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, description: &str) -> TaskAnalysis {
        self.analyze_text(description)
    }
}

/// Analyzer backed by a [`TextGenerator`], with [`HeuristicAnalyzer`] as
/// its fallback on any generation or parse failure. One attempt per call,
/// no retries.
pub struct GenerativeAnalyzer {
    generator: Arc<dyn TextGenerator>,
    fallback: HeuristicAnalyzer,
}

impl GenerativeAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator, fallback: HeuristicAnalyzer::new() }
    }

    fn build_prompt(description: &str) -> String {
        format!(
            r#"You are a task analyzer for AI coding agent recommendations. Given this natural language input, analyze and return information in JSON format:

Task: "{}"

Please analyze and return JSON with these fields:
- programming_language: detected language (or "unknown" if unclear)
- task_type: category like "bug fix", "feature development", "refactoring", "testing", "data analysis", "frontend", "backend", "devops", etc.
- complexity: "low", "medium", or "high"
- keywords: array of relevant technical keywords
- domain: "web", "mobile", "data science", "machine learning", "automation", "general", etc.
- summary: brief 1-sentence summary of the task

Return only valid JSON, no additional text."#,
            description
        )
    }

    fn parse_reply(reply: &str) -> Option<TaskAnalysis> {
        serde_json::from_str(strip_code_fence(reply)).ok()
    }
}

#[async_trait]
impl TaskAnalyzer for GenerativeAnalyzer {
    async fn analyze(&self, description: &str) -> TaskAnalysis {
        match self.generator.generate(&Self::build_prompt(description)).await {
            Ok(reply) => match Self::parse_reply(&reply) {
                Some(analysis) => analysis,
                None => {
                    tracing::warn!(
                        generator = self.generator.name(),
                        "task analysis reply was not valid JSON, using heuristic analysis"
                    );
                    self.fallback.analyze_text(description)
                }
            },
            Err(err) => {
                tracing::warn!(
                    generator = self.generator.name(),
                    error = %err,
                    "task analysis generation failed, using heuristic analysis"
                );
                self.fallback.analyze_text(description)
            }
        }
    }
}

/// First `MAX_SUMMARY_CHARS` characters of the description, with an
/// ellipsis when cut. Counts characters rather than bytes so multi-byte
/// input cannot be split mid-character.
fn summarize(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(MAX_SUMMARY_CHARS).collect();
    if chars.next().is_some() { format!("{}...", head) } else { head }
}

/// Strip a Markdown code fence from a model reply. Accepts a json-tagged
/// or bare fence and tolerates a missing closing fence.
pub(crate) fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let body =
        trimmed.strip_prefix("```json").or_else(|| trimmed.strip_prefix("```")).unwrap_or(trimmed);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_model::MockGenerator;

    #[tokio::test]
    async fn test_heuristic_analysis_of_flask_bug() {
        let analysis = HeuristicAnalyzer::new().analyze("Fix a bug in my Python Flask app").await;
        assert_eq!(analysis.programming_language, "python");
        assert_eq!(analysis.task_type, "bug fix");
        assert_eq!(analysis.complexity, Complexity::Medium);
        assert_eq!(analysis.domain, "general");
        assert_eq!(analysis.keywords, vec!["fix", "a", "bug", "in", "my"]);
        assert_eq!(analysis.summary, "Fix a bug in my Python Flask app");
    }

    #[test]
    fn test_javascript_detected_before_java() {
        let analysis = HeuristicAnalyzer::new().analyze_text("Debug my javascript widget");
        assert_eq!(analysis.programming_language, "javascript");

        let analysis = HeuristicAnalyzer::new().analyze_text("Refactor my Java Spring service");
        assert_eq!(analysis.programming_language, "java");
        assert_eq!(analysis.task_type, "refactoring");
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "build" contains "ui", which lands in the html row; it also
        // triggers the feature-development task type.
        let analysis = HeuristicAnalyzer::new().analyze_text("Build a dashboard");
        assert_eq!(analysis.programming_language, "html");
        assert_eq!(analysis.task_type, "feature development");
    }

    #[test]
    fn test_defaults_when_nothing_matches() {
        let analysis = HeuristicAnalyzer::new().analyze_text("Help with a task");
        assert_eq!(analysis.programming_language, "unknown");
        assert_eq!(analysis.task_type, "general development");
        assert_eq!(analysis.domain, "general");
    }

    #[test]
    fn test_keywords_are_lowercased_and_capped_at_five() {
        let analysis =
            HeuristicAnalyzer::new().analyze_text("Alpha BETA gamma Delta epsilon zeta eta");
        assert_eq!(analysis.keywords, vec!["alpha", "beta", "gamma", "delta", "epsilon"]);
    }

    #[test]
    fn test_summary_truncation_at_one_hundred_chars() {
        let short = "a".repeat(100);
        assert_eq!(HeuristicAnalyzer::new().analyze_text(&short).summary, short);

        let long = "a".repeat(120);
        let summary = HeuristicAnalyzer::new().analyze_text(&long).summary;
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summary_truncation_counts_characters_not_bytes() {
        let long = "日".repeat(150);
        let summary = HeuristicAnalyzer::new().analyze_text(&long).summary;
        assert_eq!(summary.chars().count(), 103);
        assert!(summary.starts_with("日"));
    }

    #[test]
    fn test_heuristic_analysis_is_deterministic() {
        let a = HeuristicAnalyzer::new().analyze_text("Optimize SQL queries in my database");
        let b = HeuristicAnalyzer::new().analyze_text("Optimize SQL queries in my database");
        assert_eq!(a, b);
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    const ANALYSIS_JSON: &str = r#"{
        "programming_language": "python",
        "task_type": "data analysis",
        "complexity": "high",
        "keywords": ["pandas", "pipeline", "etl"],
        "domain": "data science",
        "summary": "Build an ETL pipeline with pandas"
    }"#;

    #[tokio::test]
    async fn test_generative_analysis_parses_model_json() {
        let generator = Arc::new(MockGenerator::new("mock").with_response(ANALYSIS_JSON));
        let analysis =
            GenerativeAnalyzer::new(generator).analyze("Build an ETL pipeline with pandas").await;
        assert_eq!(analysis.programming_language, "python");
        assert_eq!(analysis.task_type, "data analysis");
        assert_eq!(analysis.complexity, Complexity::High);
        assert_eq!(analysis.domain, "data science");
    }

    #[tokio::test]
    async fn test_generative_analysis_accepts_fenced_json() {
        let fenced = format!("```json\n{}\n```", ANALYSIS_JSON);
        let generator = Arc::new(MockGenerator::new("mock").with_response(fenced));
        let analysis = GenerativeAnalyzer::new(generator).analyze("anything").await;
        assert_eq!(analysis.task_type, "data analysis");
    }

    #[tokio::test]
    async fn test_generative_analysis_falls_back_on_invalid_json() {
        let generator =
            Arc::new(MockGenerator::new("mock").with_response("Sorry, I cannot help with that."));
        let analysis =
            GenerativeAnalyzer::new(generator).analyze("Fix a bug in my Python Flask app").await;
        // Heuristic output, recognizable by its fixed domain.
        assert_eq!(analysis.programming_language, "python");
        assert_eq!(analysis.task_type, "bug fix");
        assert_eq!(analysis.domain, "general");
    }

    #[tokio::test]
    async fn test_generative_analysis_falls_back_on_generation_error() {
        let generator = Arc::new(MockGenerator::failing("mock", "quota exhausted"));
        let expected = HeuristicAnalyzer::new().analyze_text("Fix a bug in my Python Flask app");
        let analysis =
            GenerativeAnalyzer::new(generator).analyze("Fix a bug in my Python Flask app").await;
        assert_eq!(analysis, expected);
    }

    #[tokio::test]
    async fn test_generative_analysis_rejects_unknown_complexity() {
        let bad = r#"{
            "programming_language": "python",
            "task_type": "bug fix",
            "complexity": "extreme",
            "keywords": [],
            "domain": "general",
            "summary": "s"
        }"#;
        let generator = Arc::new(MockGenerator::new("mock").with_response(bad));
        let analysis = GenerativeAnalyzer::new(generator).analyze("fix my python bug").await;
        // Parse failure routes through the heuristics.
        assert_eq!(analysis.complexity, Complexity::Medium);
        assert_eq!(analysis.domain, "general");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            // The bound is in characters, so multi-byte input must not
            // break it either.
            #[test]
            fn prop_summary_truncates_at_one_hundred_chars(description in "\\PC{0,160}") {
                let summary = HeuristicAnalyzer::new().analyze_text(&description).summary;
                if description.chars().count() <= 100 {
                    prop_assert_eq!(summary, description);
                } else {
                    prop_assert_eq!(summary.chars().count(), 103);
                    prop_assert!(summary.ends_with("..."));
                }
            }
        }
    }
}
