use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("No TTS engine available on this system")]
    EngineUnavailable,

    #[error("{0}")]
    InvalidInput(String),

    #[error("TTS generation failed: {0}")]
    SynthesisFailure(String),

    #[error("TTS generation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EngineUnavailable
            | AppError::SynthesisFailure(_)
            | AppError::Timeout(_)
            | AppError::Config(_)
            | AppError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::EngineUnavailable => "ENGINE_UNAVAILABLE",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::SynthesisFailure(_) => "SYNTHESIS_FAILED",
            AppError::Timeout(_) => "SYNTHESIS_TIMEOUT",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::IoError(_) => "IO_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", code, message);
        } else {
            tracing::warn!("Request rejected: {} - {}", code, message);
        }

        (
            status,
            Json(ErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}
