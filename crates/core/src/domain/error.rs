// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid launch state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Invalid launch spec: {0}")]
    InvalidLaunchSpec(String),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown pause policy: {0}")]
    UnknownPausePolicy(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
