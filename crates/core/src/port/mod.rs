// Port Layer - Interfaces for external dependencies

pub mod base_dir;
pub mod console_setup;
pub mod operator;
pub mod process_launcher;
pub mod time_provider;

// Re-exports
pub use base_dir::BaseDirResolver;
pub use console_setup::ConsoleSetup;
pub use operator::OperatorPrompt;
pub use process_launcher::{ExecutionStatus, ExitReport, LaunchError, ProcessLauncher};
pub use time_provider::TimeProvider;
