//! HTTP endpoint serving the normalized stats payload.
//!
//! `GET /api/stats` answers `{ labels, values }` or, on any failure, a
//! `{ error }` body with status 500. Upstream detail only reaches the logs.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::api::{ExtractorConfig, StatExtractor};
use crate::core::ErrorPayload;
use crate::error::{RadarError, RadarResult};
use crate::source::{NotionConfig, NotionSource, RecordSource, collect_stats};

/// Shared handler state. `source` is `None` when configuration was missing
/// at startup; requests then fail with the configuration message.
pub struct ServerState<S> {
    source: Option<S>,
    extractor: StatExtractor,
}

impl<S: RecordSource> ServerState<S> {
    #[must_use]
    pub fn new(source: Option<S>, extractor: StatExtractor) -> Self {
        Self { source, extractor }
    }
}

impl ServerState<NotionSource> {
    /// Builds a Notion-backed state from the environment. Missing variables
    /// are logged and leave the state unconfigured instead of aborting.
    pub fn from_env(extractor_config: ExtractorConfig) -> RadarResult<Self> {
        let source = match NotionConfig::from_env() {
            Ok(config) => Some(NotionSource::new(
                config,
                extractor_config.title_property.clone(),
            )?),
            Err(err @ RadarError::Configuration(_)) => {
                warn!(error = %err, "serving without notion configuration");
                None
            }
            Err(err) => return Err(err),
        };
        Ok(Self::new(source, StatExtractor::new(extractor_config)))
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    configured: bool,
}

async fn handle_stats<S>(State(state): State<Arc<ServerState<S>>>) -> Response
where
    S: RecordSource + Send + Sync + 'static,
{
    let result = match &state.source {
        Some(source) => collect_stats(source, &state.extractor).await,
        None => Err(RadarError::Configuration(
            "NOTION_TOKEN or DATABASE_ID not set".to_owned(),
        )),
    };

    match result {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => {
            error!(error = %err, "stats request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorPayload::from_error(&err)),
            )
                .into_response()
        }
    }
}

async fn handle_health<S>(State(state): State<Arc<ServerState<S>>>) -> Json<HealthResponse>
where
    S: RecordSource + Send + Sync + 'static,
{
    let configured = state.source.is_some();
    Json(HealthResponse {
        status: if configured { "ok" } else { "unconfigured" },
        configured,
    })
}

/// Build the axum router.
pub fn build_router<S>(state: ServerState<S>) -> Router
where
    S: RecordSource + Send + Sync + 'static,
{
    Router::new()
        .route("/api/stats", get(handle_stats::<S>))
        .route("/health", get(handle_health::<S>))
        .with_state(Arc::new(state))
}

/// Bind `host:port` and serve until the process stops.
pub async fn run_server<S>(state: ServerState<S>, host: &str, port: u16) -> RadarResult<()>
where
    S: RecordSource + Send + Sync + 'static,
{
    let app = build_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| RadarError::Transport(format!("failed to bind {addr}: {err}")))?;
    info!(%addr, "stats endpoint listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| RadarError::Transport(format!("server error: {err}")))
}
