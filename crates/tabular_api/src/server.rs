//! Router and request handlers.
//!
//! The shell owns transport only: it reads the uploaded bytes, invokes the
//! loader then the engine, and relays the engine's report verbatim as the
//! response body. Loader failures surface as HTTP 400; a failing validation
//! is still an HTTP 200.

use crate::app_error::AppError;
use crate::state::AppState;
use anyhow::{Result, anyhow};
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::time::Duration;
use tabular_core::ValidationReport;
use tabular_loader::load_csv;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Upload size cap, enough for multi-million-row CSVs.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

const REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Builds the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(
            "/validate",
            post(validate_upload).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            REQUEST_TIMEOUT_SECONDS,
        )))
        .with_state(state)
}

/// Binds and serves until ctrl-c.
pub async fn run_http_server(state: AppState, address: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install shutdown CTRL+C signal handler");
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /validate`: one CSV file as a multipart form field named `file`.
///
/// Returns the serialized validation report unchanged, regardless of
/// validation outcome. Only uploads that cannot be parsed at all are
/// rejected, with HTTP 400.
async fn validate_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ValidationReport>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(anyhow!(err)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let is_csv = field
            .file_name()
            .is_some_and(|name| name.to_lowercase().ends_with(".csv"));
        if !is_csv {
            return Err(AppError::BadRequest(anyhow!("Uploaded file must be a CSV.")));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(anyhow!(err)))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest(anyhow!("Uploaded file is empty.")));
        }

        let table = load_csv(&bytes).map_err(|err| AppError::BadRequest(anyhow!(err)))?;
        let report = state.validator.validate(&table);
        tracing::debug!(
            rows = table.len(),
            errors = report.errors().len(),
            "table validated"
        );

        return Ok(Json(report));
    }

    Err(AppError::BadRequest(anyhow!(
        "Missing multipart field 'file'"
    )))
}
