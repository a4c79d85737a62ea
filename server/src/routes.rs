use crate::config::{ConfigError, ServerConfig};
use crate::error::ApiError;
use asciify::AsciiConfig;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only request context
#[derive(Debug, Clone)]
pub struct AppState {
    pub render: Arc<AsciiConfig>,
    pub field_name: Arc<str>,
    pub timeout: Duration,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            render: Arc::new(config.render.to_ascii_config()?),
            field_name: Arc::from(config.server.field_name.as_str()),
            timeout: config.request_timeout(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AsciiResponse {
    pub ascii: String,
}

/// Build the HTTP application for a configuration
///
/// Routes:
/// * `POST /api/convert` - multipart upload, answers `{ "ascii": ... }`
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let state = AppState::from_config(config)?;
    log::info!(
        "Rendering {}x{} grid, gamma {}, double width {}",
        state.render.width,
        state.render.height,
        state.render.gamma,
        state.render.double_width
    );
    Ok(router(state, config.server.max_upload_bytes))
}

/// Build the router around an already resolved state
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/convert", post(convert_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn convert_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AsciiResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| ApiError::Form(rejection.body_text()))?;
    let bytes = read_file_field(&mut multipart, &state.field_name).await?;
    let size = bytes.len();

    // Decoding and mapping are CPU bound; keep them off the async workers
    let render = Arc::clone(&state.render);
    let task = tokio::task::spawn_blocking(move || asciify::convert(&bytes, &render));
    // On timeout only the join handle is dropped; a blocking task cannot be
    // aborted, so the conversion runs to completion and its result is discarded
    let ascii = tokio::time::timeout(state.timeout, task)
        .await
        .map_err(|_| ApiError::Timeout(state.timeout))???;

    log::debug!("Converted {} byte upload into {} bytes of ASCII", size, ascii.len());
    Ok(Json(AsciiResponse { ascii }))
}

/// Pull the bytes of the named field, skipping any other fields
async fn read_file_field(multipart: &mut Multipart, field_name: &str) -> Result<Bytes, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(field_name) {
            return Ok(field.bytes().await?);
        }
    }
    Err(ApiError::MissingInput)
}
