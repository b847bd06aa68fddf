// Launch Spec - the fixed external runtime invocation

use crate::application::constants::{DEFAULT_ENTRY_POINT, DEFAULT_RUNTIME, DEFAULT_SUB_COMMAND};
use crate::domain::error::{DomainError, Result};
use std::path::PathBuf;

/// What to run and where
///
/// The child is invoked as `<program> <sub_command> <entry_point>` with
/// `working_dir` as its current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String,
    pub sub_command: String,
    pub entry_point: String,
    pub working_dir: PathBuf,
}

impl LaunchSpec {
    pub fn new(
        program: impl Into<String>,
        sub_command: impl Into<String>,
        entry_point: impl Into<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            sub_command: sub_command.into(),
            entry_point: entry_point.into(),
            working_dir: working_dir.into(),
        }
    }

    /// `streamlit run <entry_point>` anchored at `working_dir`
    pub fn streamlit(entry_point: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self::new(DEFAULT_RUNTIME, DEFAULT_SUB_COMMAND, entry_point, working_dir)
    }

    /// Default application launch anchored at `working_dir`
    pub fn default_for(working_dir: impl Into<PathBuf>) -> Self {
        Self::streamlit(DEFAULT_ENTRY_POINT, working_dir)
    }

    /// Arguments passed to the program
    ///
    /// An empty sub-command is omitted so plain interpreters can run the entry point directly.
    pub fn argv(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(2);
        if !self.sub_command.is_empty() {
            args.push(self.sub_command.clone());
        }
        args.push(self.entry_point.clone());
        args
    }

    /// Reject specs that can never start
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(DomainError::InvalidLaunchSpec(
                "program must not be empty".to_string(),
            ));
        }
        if self.entry_point.trim().is_empty() {
            return Err(DomainError::InvalidLaunchSpec(
                "entry point must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
