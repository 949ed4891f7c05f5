use crate::ServerConfig;
use axum::{Json, extract::State, http::StatusCode};
use scout_core::{RankedAgent, TaskAnalysis};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct RecommendController {
    config: ServerConfig,
}

impl RecommendController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub task_analysis: TaskAnalysis,
    pub recommendations: Vec<RankedAgent>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn recommend(
    State(controller): State<RecommendController>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, (StatusCode, Json<ErrorResponse>)> {
    let task = request.task.trim();
    if task.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: "Task description is required".to_string() }),
        ));
    }

    tracing::info!(task_bytes = task.len(), "handling recommendation request");
    let result = controller.config.recommender.recommend(task).await;

    Ok(Json(RecommendResponse {
        success: true,
        task_analysis: result.task_analysis,
        recommendations: result.agents,
    }))
}
