use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use system_tts_server::{create_router, AppError, AppState, ServerConfig, TtsService};

fn main() -> Result<(), AppError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr()?;

    tracing::info!("System TTS Server v{}", env!("CARGO_PKG_VERSION"));

    // Probe once with blocking process calls, before the runtime exists.
    // The result is fixed until restart.
    let tts = TtsService::from_config(&config);
    let engine = tts.engine();

    if engine.is_available() {
        tracing::info!("Using TTS engine: {}", engine);
    } else {
        tracing::warn!("No open-source TTS engine found. Install one of these:");
        tracing::warn!("  espeak-ng: apt install espeak-ng / brew install espeak-ng");
        tracing::warn!("  espeak: apt install espeak / brew install espeak");
        tracing::warn!("  festival: apt install festival / brew install festival");
        tracing::warn!("Server will start but speech generation fails until an engine is installed");
    }

    if let Some(timeout) = config.timeout {
        tracing::info!("Engine timeout: {}s", timeout.as_secs());
    }

    let app = create_router(Arc::new(AppState { tts }));

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(addr, app))
}

async fn serve(addr: SocketAddr, app: Router) -> Result<(), AppError> {
    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
