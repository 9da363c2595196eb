//! Request handling
//!
//! Reconstructs the two request identifiers the aggregation core consumes
//! (the canonical request IRI and the site base IRI), maps the URL path onto
//! the workspace, and shapes success and failure responses.

use axum::{
    extract::{Host, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::path::{Component, Path};
use std::sync::Arc;
use tracing::warn;

use crate::config::ServerConfig;
use crate::container::{describe_container, ContainerError, RequestContext};
use crate::rdf::PrefixTable;

/// Shared read-only state for all requests
#[derive(Clone)]
pub struct AppState {
    /// Process-wide configuration
    pub config: Arc<ServerConfig>,
    /// The namespace compaction table
    pub prefixes: Arc<PrefixTable>,
}

/// JSON error envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// HTTP status code
    pub code: u16,
    /// Short title
    pub title: String,
    /// Human-readable description
    pub description: String,
}

/// Catch-all GET handler: describe the container for the request path.
pub async fn container_handler(
    State(state): State<AppState>,
    Host(host): Host,
    uri: Uri,
) -> Response {
    let base = state
        .config
        .external_base
        .clone()
        .unwrap_or_else(|| format!("http://{}", host));

    let decoded = match percent_decode_str(uri.path()).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => return not_found(uri.path()),
    };

    let relative = decoded.trim_start_matches('/');
    // Only plain path segments may reach the filesystem.
    if Path::new(relative)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return not_found(&decoded);
    }
    let directory = state.config.workspace.join(relative);

    let ctx = RequestContext::new(format!("{}{}", base, decoded), base);

    match describe_container(&ctx, &directory, &state.prefixes).await {
        Ok(description) => {
            for error in &description.file_errors {
                warn!(container = ctx.current(), "{}", error);
            }
            (
                [(header::CONTENT_TYPE, "application/ld+json")],
                Json(description.document),
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

fn not_found(description: &str) -> Response {
    let body = ApiError {
        code: StatusCode::NOT_FOUND.as_u16(),
        title: "No resources found".to_string(),
        description: format!("{} is not a valid directory", description),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

fn error_response(error: ContainerError) -> Response {
    let (status, title) = match &error {
        ContainerError::NotFound(_) | ContainerError::InvalidIdentifier(_) => {
            (StatusCode::NOT_FOUND, "No resources found")
        }
        ContainerError::Serialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Serialization failed")
        }
        ContainerError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };
    let body = ApiError {
        code: status.as_u16(),
        title: title.to_string(),
        description: error.to_string(),
    };
    (status, Json(body)).into_response()
}
