//! HTTP server wiring

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::rdf::PrefixTable;

use super::handler::{container_handler, AppState};

/// HTTP server publishing the workspace as LDP containers
pub struct HttpServer {
    config: Arc<ServerConfig>,
    prefixes: Arc<PrefixTable>,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: ServerConfig, prefixes: PrefixTable) -> Self {
        Self {
            config: Arc::new(config),
            prefixes: Arc::new(prefixes),
        }
    }

    /// Build the router; exposed separately so tests can drive it directly
    pub fn router(&self) -> Router {
        let state = AppState {
            config: Arc::clone(&self.config),
            prefixes: Arc::clone(&self.prefixes),
        };
        Router::new()
            .fallback(get(container_handler))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start serving
    pub async fn start(&self) -> std::io::Result<()> {
        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(
            "LDP container API on http://{} (workspace {})",
            addr,
            self.config.workspace.display()
        );

        axum::serve(listener, self.router()).await
    }
}
