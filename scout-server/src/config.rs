use std::{sync::Arc, time::Duration};

use scout_engine::Recommender;

/// Security configuration for the recommendation server.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    /// Allowed origins for CORS (empty = allow all, which is NOT recommended for production)
    pub allowed_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 1MB)
    pub max_body_size: usize,
    /// Request timeout duration (default: 120 seconds, generative analysis can be slow)
    pub request_timeout: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(), // Empty = permissive (for dev), should be configured for prod
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl SecurityConfig {
    /// Create a development configuration (permissive CORS, generous timeout)
    pub fn development() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_body_size: 1024 * 1024,
            request_timeout: Duration::from_secs(240),
        }
    }

    /// Create a production configuration with specific allowed origins
    pub fn production(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            max_body_size: 1024 * 1024,
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Configuration for the recommendation server.
#[derive(Clone)]
pub struct ServerConfig {
    pub recommender: Arc<Recommender>,
    pub security: SecurityConfig,
}

impl ServerConfig {
    pub fn new(recommender: Arc<Recommender>) -> Self {
        Self { recommender, security: SecurityConfig::default() }
    }

    pub fn with_security(mut self, security: SecurityConfig) -> Self {
        self.security = security;
        self
    }

    /// Configure allowed CORS origins
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.security.allowed_origins = origins;
        self
    }

    /// Configure maximum request body size
    pub fn with_max_body_size(mut self, size: usize) -> Self {
        self.security.max_body_size = size;
        self
    }

    /// Configure request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.security.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::Catalog;

    const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;
    const DEFAULT_TIMEOUT: u64 = 120;
    const DEV_TIMEOUT: u64 = 240;

    fn create_recommender() -> Arc<Recommender> {
        Arc::new(Recommender::heuristic(Arc::new(Catalog::default())))
    }

    #[test]
    fn test_security_config_constructors() {
        let default = SecurityConfig::default();
        assert_eq!(default.allowed_origins.len(), 0);
        assert_eq!(default.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert_eq!(default.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT));

        let dev = SecurityConfig::development();
        assert_eq!(dev.allowed_origins.len(), 0);
        assert_eq!(dev.request_timeout, Duration::from_secs(DEV_TIMEOUT));

        let prod = SecurityConfig::production(vec!["https://example.com".to_string()]);
        assert_eq!(prod.allowed_origins, vec!["https://example.com"]);
        assert_eq!(prod.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_server_config_security_passthrough() {
        let config = ServerConfig::new(create_recommender())
            .with_allowed_origins(vec!["https://scout.example.com".into()])
            .with_max_body_size(100)
            .with_request_timeout(Duration::from_secs(10));

        assert_eq!(config.security.allowed_origins, vec!["https://scout.example.com"]);
        assert_eq!(config.security.max_body_size, 100);
        assert_eq!(config.security.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_server_config_with_security() {
        let config =
            ServerConfig::new(create_recommender()).with_security(SecurityConfig::development());
        assert_eq!(config.security.request_timeout, Duration::from_secs(DEV_TIMEOUT));
    }
}
