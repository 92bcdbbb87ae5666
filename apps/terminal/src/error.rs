//! Error handling for the terminal game

use numquiz_core::QuizError;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(String),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
