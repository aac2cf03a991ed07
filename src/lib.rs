pub mod api;
pub mod config;
pub mod error;
pub mod tts;

pub use api::routes::{create_router, AppState};
pub use config::ServerConfig;
pub use error::AppError;
pub use tts::{Engine, TtsService};
