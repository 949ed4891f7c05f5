pub mod agents;
pub mod recommend;

pub use agents::AgentsController;
pub use recommend::RecommendController;
