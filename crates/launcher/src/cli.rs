//! Command-line surface
//!
//! Every flag is optional. Running with no arguments launches `streamlit run app.py`
//! from the launcher's own directory with Japanese operator text.

use benzene_launcher_core::application::constants::{
    DEFAULT_ENTRY_POINT, DEFAULT_RUNTIME, DEFAULT_SUB_COMMAND,
};
use benzene_launcher_core::application::SupervisorConfig;
use benzene_launcher_core::domain::{ConsoleConfig, Locale, PausePolicy};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "benzene-launcher")]
#[command(about = "Starts the Benzene Oxidation Activity Analysis application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Runtime executable, resolved on PATH
    #[arg(long, default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Sub-command passed before the entry point (empty to omit)
    #[arg(long, default_value = DEFAULT_SUB_COMMAND)]
    pub sub_command: String,

    /// Application entry-point file, relative to the launcher directory
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    pub entry_point: String,

    /// Operator message language (ja, en)
    #[arg(long, default_value = "ja")]
    pub lang: Locale,

    /// Wait for a keypress after a failure (auto: only when stdin is a terminal)
    #[arg(long, default_value = "auto")]
    pub pause: PausePolicy,

    /// Never wait after a failure (same as --pause never)
    #[arg(long, conflicts_with = "pause")]
    pub no_pause: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log launcher progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human readable
    Pretty,
    /// Single-line, human readable
    Compact,
    /// Structured JSON lines
    Json,
}

impl Cli {
    pub fn pause_policy(&self) -> PausePolicy {
        if self.no_pause {
            PausePolicy::Never
        } else {
            self.pause
        }
    }

    pub fn supervisor_config(&self) -> SupervisorConfig {
        SupervisorConfig {
            console: ConsoleConfig {
                color: !self.no_color,
                ..ConsoleConfig::default()
            },
            locale: self.lang,
            runtime: self.runtime.clone(),
            sub_command: self.sub_command.clone(),
            entry_point: self.entry_point.clone(),
        }
    }
}
