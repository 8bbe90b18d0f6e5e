use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Transport-level failures of the HTTP exchange.
///
/// Validation failures are never represented here: a "bad" dataset is a
/// normal HTTP 200 response carrying a `fail` report. This type covers only
/// uploads the loader cannot turn into a table at all.
#[derive(Debug)]
pub enum AppError {
    InternalServerError(anyhow::Error),
    BadRequest(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InternalServerError(error) => {
                tracing::error!(%error, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::BadRequest(error) => (StatusCode::BAD_REQUEST, error.to_string()),
        };
        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}
