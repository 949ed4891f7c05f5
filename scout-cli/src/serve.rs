use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use scout_core::Catalog;
use scout_server::{ServerConfig, create_app};

use crate::launcher::build_recommender;

pub async fn run_serve(host: &str, port: u16, catalog_path: &Path) -> Result<()> {
    let catalog = Arc::new(Catalog::load_or_empty(catalog_path));
    if catalog.is_empty() {
        tracing::warn!(
            path = %catalog_path.display(),
            "catalog is empty, every recommendation list will be empty"
        );
    } else {
        tracing::info!(agents = catalog.len(), "catalog loaded");
    }

    let recommender = Arc::new(build_recommender(catalog));
    let config = ServerConfig::new(recommender);
    if config.security.allowed_origins.is_empty() {
        tracing::warn!("CORS allows all origins, restrict allowed origins for production");
    }

    let app = create_app(config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("Agent Scout server starting on http://{}", addr);
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await?;

    Ok(())
}
