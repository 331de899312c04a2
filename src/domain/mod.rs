//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models, configuration, and error types
//! without any external dependencies (network, IO, etc.).

pub mod config;
pub mod error;
pub mod models;

pub use config::{ApiConfig, AppConfig};
pub use error::{AppError, Result};
pub use models::{
    BatchReport, InteractiveReport, RemoteThread, Thread, ThreadMessage, ThreadMetadata,
    SOURCE_TAG, THREAD_ID_PREFIX,
};
