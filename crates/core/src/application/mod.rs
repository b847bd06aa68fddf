// Application Layer - Use cases

pub mod console;
pub mod constants;
pub mod supervisor;

pub use console::Console;
pub use supervisor::{Supervisor, SupervisorConfig, SupervisorOutcome};
