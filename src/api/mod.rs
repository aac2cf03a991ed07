pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::tts::VoiceInfo;

pub const MAX_TEXT_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_voice() -> String {
    "default".to_string()
}

fn default_speed() -> f32 {
    1.0
}

impl SpeakRequest {
    /// Checked before any engine process is started.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::InvalidInput("Text cannot be empty".into()));
        }

        if self.text.chars().count() > MAX_TEXT_CHARS {
            return Err(AppError::InvalidInput(format!(
                "Text too long (max {} characters)",
                MAX_TEXT_CHARS
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub engine: String,
    pub status: String,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine: String,
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceInfo>,
    pub engine: String,
}
