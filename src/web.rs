//! Server assembly: router, CORS, static assets, listener

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api;
use crate::catalog::Catalog;
use crate::config::ServerConfig;

/// Build the full application router.
///
/// The presentation layer is an external collaborator served as static
/// files; everything under `/api` is the catalog service.
pub fn app(catalog: Arc<Catalog>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(catalog))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

pub async fn run(server: &ServerConfig, catalog: Catalog) -> Result<()> {
    let app = app(Arc::new(catalog), &server.static_dir);

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Web server terminated")?;
    Ok(())
}
