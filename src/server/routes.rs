//! HTTP API routes
//!
//! The two earthquake queries are exposed as GET endpoints taking the same
//! query parameters as the backing API. Successful bodies are forwarded
//! byte-for-byte; upstream error statuses are forwarded as-is.

use crate::error::Error;
use crate::mcp::protocol::Tool;
use crate::mcp::tools::get_tools;
use crate::quake::{AroundQuery, EarthquakeSource, RecentQuery};
use crate::server::state::AppState;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Create the API router
pub fn create_router<S: EarthquakeSource + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/earthquakes/recent", get(recent_handler::<S>))
        .route("/api/earthquakes/around", get(around_handler::<S>))
        .route("/api/status", get(status_handler::<S>))
        .route("/api/tools", get(tools_handler))
        .layer(cors)
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::Upstream { .. } => "UPSTREAM_ERROR",
            Error::Http(_) => "UPSTREAM_UNREACHABLE",
            Error::Json(_) => "UPSTREAM_INVALID_JSON",
            Error::Utf8(_) => "UPSTREAM_INVALID_BODY",
            Error::InvalidQuery(_) => "INVALID_QUERY",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Map an error to the status the caller sees
///
/// Upstream error statuses pass through; anything that kept us from getting a
/// usable upstream answer is a 502.
fn error_response(err: Error) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        Error::Upstream { status, .. } => StatusCode::from_u16(*status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::BAD_GATEWAY),
        Error::Http(_) | Error::Json(_) | Error::Utf8(_) => StatusCode::BAD_GATEWAY,
        Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiError::from(err)))
}

/// Malformed or missing query parameters, in the same JSON shape as other errors
fn query_rejection(rejection: QueryRejection) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError {
            error: rejection.body_text(),
            code: "INVALID_QUERY".to_string(),
        }),
    )
}

fn json_document(doc: crate::quake::Document) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        doc.get().to_owned(),
    )
        .into_response()
}

/// Recent earthquakes
///
/// GET /api/earthquakes/recent
async fn recent_handler<S: EarthquakeSource>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<RecentQuery>, QueryRejection>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let Query(query) = query.map_err(query_rejection)?;
    let doc = state.source.recent(&query).await.map_err(error_response)?;
    Ok(json_document(doc))
}

/// Earthquakes around a coordinate
///
/// GET /api/earthquakes/around
async fn around_handler<S: EarthquakeSource>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<AroundQuery>, QueryRejection>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let Query(query) = query.map_err(query_rejection)?;
    let doc = state.source.around(&query).await.map_err(error_response)?;
    Ok(json_document(doc))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Earthquake source name
    pub source: String,
    /// Upstream base URL
    pub upstream: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler<S: EarthquakeSource>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.source.name().to_string(),
        upstream: state.upstream.clone(),
        uptime_secs: state.uptime_secs(),
    })
}

/// Tools list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<Tool>,
}

/// List the tool definitions
///
/// GET /api/tools
async fn tools_handler() -> Json<ToolsResponse> {
    Json(ToolsResponse { tools: get_tools() })
}
