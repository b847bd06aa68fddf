// Launcher constants (no magic values)

/// External runtime resolved on the execution path
pub const DEFAULT_RUNTIME: &str = "streamlit";

/// Sub-command passed to the runtime before the entry point
pub const DEFAULT_SUB_COMMAND: &str = "run";

/// Application entry-point file, relative to the base directory
pub const DEFAULT_ENTRY_POINT: &str = "app.py";

/// Supervisor exit code when the child gave none (spawn failure, signal, resolver error)
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Width of the banner rule line
pub const BANNER_RULE_WIDTH: usize = 40;
