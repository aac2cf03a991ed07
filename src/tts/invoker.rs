use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use tempfile::{Builder, TempPath};
use tokio::process::Command;

use crate::error::AppError;
use crate::tts::engine::Engine;

/// espeak's default rate at speed 1.0.
pub const BASE_WPM: f32 = 160.0;

/// Settings shared by every invocation.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    pub temp_dir: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

/// Any speed maps to a usable rate; zero, negative and NaN give 1 wpm.
pub fn words_per_minute(speed: f32) -> u32 {
    let wpm = (BASE_WPM * speed).round();
    if wpm.is_nan() || wpm < 1.0 {
        1
    } else {
        wpm as u32
    }
}

/// Runs the engine once and returns the WAV bytes it produced.
///
/// Temporary files are held as [`TempPath`]s so they are removed on every
/// exit path, including timeouts and a dropped request future.
pub async fn synthesize(
    engine: &Engine,
    text: &str,
    speed: f32,
    options: &InvokeOptions,
) -> Result<Vec<u8>, AppError> {
    let output_path = temp_path(options, ".wav", None)?;

    match engine {
        Engine::Espeak { name, program } => {
            run_espeak(name, program, text, speed, &output_path, options).await?
        }
        Engine::Festival { program } => run_festival(program, text, &output_path, options).await?,
        Engine::None => return Err(AppError::EngineUnavailable),
    }

    let audio = tokio::fs::read(&output_path)
        .await
        .map_err(|e| AppError::SynthesisFailure(format!("Failed to read generated audio: {}", e)))?;

    if audio.is_empty() {
        return Err(AppError::SynthesisFailure(format!(
            "{} produced no audio",
            engine.name()
        )));
    }

    Ok(audio)
}

async fn run_espeak(
    name: &str,
    program: &Path,
    text: &str,
    speed: f32,
    output_path: &Path,
    options: &InvokeOptions,
) -> Result<(), AppError> {
    let wpm = words_per_minute(speed);
    tracing::debug!("Running {} at {} wpm into {}", name, wpm, output_path.display());

    let mut cmd = Command::new(program);
    cmd.arg("-s")
        .arg(wpm.to_string())
        .arg("-w")
        .arg(output_path)
        .arg(text)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = run(cmd, name, options.timeout).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::SynthesisFailure(format!(
            "{} failed ({}): {}",
            name,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

async fn run_festival(
    program: &Path,
    text: &str,
    output_path: &Path,
    options: &InvokeOptions,
) -> Result<(), AppError> {
    // festival has no output flag; it reads a text file and writes audio to stdout.
    let text_path = temp_path(options, ".txt", Some(text))?;
    let audio_sink = std::fs::File::create(output_path)?;

    tracing::debug!(
        "Running festival on {} into {}",
        text_path.display(),
        output_path.display()
    );

    let mut cmd = Command::new(program);
    cmd.arg("--tts")
        .arg(&text_path)
        .stdout(Stdio::from(audio_sink))
        .stderr(Stdio::piped());

    let output = run(cmd, "festival", options.timeout).await?;
    drop(text_path);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::SynthesisFailure(format!(
            "Festival failed ({}): {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

async fn run(mut cmd: Command, name: &str, timeout: Option<Duration>) -> Result<Output, AppError> {
    cmd.stdin(Stdio::null()).kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| {
        AppError::SynthesisFailure(format!("Failed to run {} (is it installed?): {}", name, e))
    })?;

    let waited = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!("{} did not finish within {:?}, killed", name, limit);
                return Err(AppError::Timeout(limit));
            }
        },
        None => child.wait_with_output().await,
    };

    waited.map_err(|e| AppError::SynthesisFailure(format!("Failed to wait for {}: {}", name, e)))
}

/// Creates a uniquely named file that is deleted when the returned path drops.
fn temp_path(
    options: &InvokeOptions,
    suffix: &str,
    contents: Option<&str>,
) -> Result<TempPath, AppError> {
    let mut builder = Builder::new();
    builder.prefix("tts-").suffix(suffix);

    let mut file = match &options.temp_dir {
        Some(dir) => builder.tempfile_in(dir)?,
        None => builder.tempfile()?,
    };

    if let Some(contents) = contents {
        file.write_all(contents.as_bytes())?;
        file.flush()?;
    }

    Ok(file.into_temp_path())
}
