use crate::ServerConfig;
use axum::{Json, extract::State};
use scout_core::AgentRecord;
use serde::Serialize;

#[derive(Clone)]
pub struct AgentsController {
    config: ServerConfig,
}

impl AgentsController {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Serialize)]
pub struct AgentsResponse {
    pub success: bool,
    pub agents: Vec<AgentRecord>,
}

pub async fn list_agents(State(controller): State<AgentsController>) -> Json<AgentsResponse> {
    let agents = controller.config.recommender.agents().to_vec();
    Json(AgentsResponse { success: true, agents })
}
