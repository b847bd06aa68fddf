// Domain Layer - Pure launcher logic and value types

pub mod command;
pub mod console;
pub mod error;
pub mod launch;
pub mod locale;
pub mod pause;

// Re-exports
pub use command::LaunchSpec;
pub use console::{ConsoleConfig, ConsoleEncoding};
pub use error::DomainError;
pub use launch::{LaunchRun, LaunchState};
pub use locale::{Locale, Messages};
pub use pause::PausePolicy;
