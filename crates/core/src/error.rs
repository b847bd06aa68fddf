// Central Error Type for the Launcher

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base directory error: {0}")]
    BaseDir(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
