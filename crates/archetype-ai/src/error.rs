use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::triangulation::InputError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Top-level application error. Input faults map to 4xx responses,
/// everything else is an internal failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Input(InputError::InvalidBirthDate { .. }) => StatusCode::BAD_REQUEST,
            AppError::Input(InputError::IncompleteQuestionnaire { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Incomplete questionnaires carry the missing ids so clients
        // can re-prompt for exactly those questions.
        let body = match &self {
            AppError::Input(InputError::IncompleteQuestionnaire { missing }) => {
                Json(json!({ "error": self.to_string(), "missing_question_ids": missing }))
            }
            _ => Json(json!({ "error": self.to_string() })),
        };

        (status, body).into_response()
    }
}
