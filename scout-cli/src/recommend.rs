use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use scout_core::Catalog;

use crate::launcher::build_recommender;

/// Run a single recommendation against the catalog and print the result as
/// pretty JSON, in the same shape the HTTP API returns.
pub async fn run_recommend(task: &str, catalog_path: &Path) -> Result<()> {
    let task = task.trim();
    if task.is_empty() {
        anyhow::bail!("task description is required");
    }

    let catalog = Catalog::load(catalog_path)?;
    let recommender = build_recommender(Arc::new(catalog));

    let result = recommender.recommend(task).await;
    let output = serde_json::json!({
        "task_analysis": result.task_analysis,
        "recommendations": result.agents,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_rejects_blank_task() {
        let err = run_recommend("   ", Path::new("data/agents.json")).await.unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[tokio::test]
    async fn test_missing_catalog_is_an_error() {
        let err = run_recommend("Fix a bug", Path::new("/nonexistent/agents.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[tokio::test]
    async fn test_recommend_with_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let agents = serde_json::json!([{
            "name": "CodePilot",
            "description": "AI pair programmer",
            "features": ["code completion"],
            "ideal_use_cases": ["bug fix"],
            "supported_languages": ["Python"],
            "pricing": "Free",
            "website": "https://codepilot.example.com"
        }]);
        write!(file, "{}", agents).unwrap();

        run_recommend("Fix a Python bug", file.path()).await.unwrap();
    }
}
