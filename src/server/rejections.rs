use axum::{
    Json,
    http::{StatusCode, header::ALLOW},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::Mode;
use crate::error::CatalogError;

#[derive(Debug)]
pub enum AppError {
    PlantNotFound(CatalogError),
    NotFound,
    /// Static files are only served for GET and HEAD.
    MethodNotAllowed,
    /// `detail` is only sent to the client in development mode.
    Internal { detail: String, mode: Mode },
}

impl AppError {
    pub fn internal(detail: impl Into<String>, mode: Mode) -> Self {
        AppError::Internal {
            detail: detail.into(),
            mode,
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::PlantNotFound(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::PlantNotFound(err) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Plant not found", "message": err.to_string() }),
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Not found", "message": "No such resource" }),
            ),
            AppError::MethodNotAllowed => {
                let body = json!({ "error": "Method not allowed", "message": "Use GET or HEAD" });
                return (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(ALLOW, "GET, HEAD")],
                    Json(body),
                )
                    .into_response();
            }
            AppError::Internal { detail, mode } => {
                tracing::error!("internal server error: {detail}");
                let message = match mode {
                    Mode::Development => detail,
                    Mode::Production => "Internal server error".to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Something went wrong!", "message": message }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
