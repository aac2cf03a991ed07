pub mod engine;
pub mod invoker;
pub mod voice;

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::error::AppError;

pub use engine::{Engine, EngineFamily};
pub use invoker::InvokeOptions;
pub use voice::VoiceInfo;

/// Holds the engine picked at startup. Shared read-only by all handlers.
pub struct TtsService {
    engine: Engine,
    options: InvokeOptions,
}

impl TtsService {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            options: InvokeOptions::default(),
        }
    }

    /// Probes for an engine once and applies the temp dir and timeout settings.
    pub fn from_config(config: &ServerConfig) -> Self {
        let engine = engine::probe(config.engine_dir.as_deref());
        let mut service = Self::new(engine).with_timeout(config.timeout);
        if let Some(dir) = &config.temp_dir {
            service = service.with_temp_dir(dir);
        }
        service
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.temp_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.options.timeout = timeout;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// `voice` is advisory: it is logged but no engine is told about it.
    pub async fn speak(&self, text: &str, voice: &str, speed: f32) -> Result<Vec<u8>, AppError> {
        if !self.engine.is_available() {
            return Err(AppError::EngineUnavailable);
        }

        tracing::debug!(
            "Generating speech: '{}' ({} chars, voice={}, speed={}) using {}",
            preview(text),
            text.chars().count(),
            voice,
            speed,
            self.engine
        );

        let audio = invoker::synthesize(&self.engine, text, speed, &self.options)
            .await
            .map_err(|e| {
                tracing::error!("TTS generation failed with {}: {}", self.engine, e);
                e
            })?;

        tracing::debug!("Generated {} bytes of audio", audio.len());
        Ok(audio)
    }

    pub fn list_voices(&self) -> Vec<VoiceInfo> {
        voice::catalog(&self.engine)
    }
}

fn preview(text: &str) -> String {
    const MAX: usize = 50;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let mut short: String = text.chars().take(MAX).collect();
        short.push_str("...");
        short
    }
}
