use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, SpeakRequest, StatusResponse, VoicesResponse};
use crate::api::routes::AppState;
use crate::error::AppError;

pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    // The server is up either way; `available` says whether speech works.
    let engine = state.tts.engine();
    Json(StatusResponse {
        message: "Simple TTS API is running".to_string(),
        engine: engine.name().to_string(),
        status: "ready".to_string(),
        available: engine.is_available(),
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let engine = state.tts.engine();
    Json(HealthResponse {
        status: "healthy".to_string(),
        engine: engine.name().to_string(),
        available: engine.is_available(),
    })
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoicesResponse> {
    Json(VoicesResponse {
        voices: state.tts.list_voices(),
        engine: state.tts.engine().name().to_string(),
    })
}

pub async fn generate_speech(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SpeakRequest>,
) -> Result<Response, AppError> {
    request.validate()?;

    let wav = state
        .tts
        .speak(&request.text, &request.voice, request.speed)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "audio/wav".to_string()),
            (header::CONTENT_LENGTH, wav.len().to_string()),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=speech.wav".to_string(),
            ),
        ],
        wav,
    )
        .into_response())
}
