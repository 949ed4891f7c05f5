//! Gemini client implementation.

use async_trait::async_trait;
use reqwest::Client;
use scout_core::{Result, ScoutError, TextGenerator};

use super::config::{GEMINI_API_BASE, GeminiConfig};
use super::convert::{self, GenerateContentResponse};

/// Client for the Gemini `generateContent` REST API.
///
/// # Example
///
/// ```rust,ignore
/// use scout_model::{GeminiConfig, GeminiGenerator};
///
/// let generator = GeminiGenerator::new(GeminiConfig::new(
///     std::env::var("GEMINI_API_KEY").unwrap(),
/// ))?;
/// ```
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGenerator {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScoutError::Model(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a client for the default flash model.
    pub fn flash(api_key: impl Into<String>) -> Result<Self> {
        Self::new(GeminiConfig::new(api_key))
    }

    /// Build the API URL for content generation.
    fn api_url(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(GEMINI_API_BASE);
        format!("{}/models/{}:generateContent", base.trim_end_matches('/'), self.config.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = convert::text_request(prompt);
        tracing::debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoutError::Model(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScoutError::Model(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ScoutError::Model(format!("Failed to parse Gemini response: {}", e)))?;

        convert::response_text(&body)
            .ok_or_else(|| ScoutError::Model("Gemini response contained no text".to_string()))
    }
}
