use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scout_core::{Result, ScoutError, TextGenerator};

/// Scripted generator for tests.
///
/// Replies are returned in the order they were added; once exhausted, the
/// last one repeats. A mock built with [`MockGenerator::failing`] errors on
/// every call, which is how fallback paths get exercised.
pub struct MockGenerator {
    name: String,
    responses: Vec<String>,
    cursor: AtomicUsize,
    error: Option<String>,
}

impl MockGenerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), responses: vec![], cursor: AtomicUsize::new(0), error: None }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.responses.push(response.into());
        self
    }

    /// A generator that fails every call with a model error.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: vec![],
            cursor: AtomicUsize::new(0),
            error: Some(message.into()),
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        if let Some(message) = &self.error {
            return Err(ScoutError::Model(message.clone()));
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        match self.responses.get(index.min(self.responses.len().saturating_sub(1))) {
            Some(response) => Ok(response.clone()),
            None => Err(ScoutError::Model("mock has no scripted responses".to_string())),
        }
    }
}
