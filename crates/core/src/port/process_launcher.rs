// Process Launcher Port
// Abstraction for the blocking "spawn and wait" of the external server process

use crate::domain::LaunchSpec;
use async_trait::async_trait;
use thiserror::Error;

/// How the child terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// Exited with status 0
    Success,
    /// Exited non-zero, or was terminated by a signal
    Failed,
}

/// Result of a child process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReport {
    pub status: ExecutionStatus,
    /// None when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub duration_ms: i64,
}

impl ExitReport {
    pub fn success(duration_ms: i64) -> Self {
        Self {
            status: ExecutionStatus::Success,
            exit_code: Some(0),
            duration_ms,
        }
    }

    pub fn failed(exit_code: Option<i32>, duration_ms: i64) -> Self {
        Self {
            status: ExecutionStatus::Failed,
            exit_code,
            duration_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }
}

/// The process could not be started (or its wait could not complete)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("Runtime not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Wait failed: {0}")]
    Wait(String),
}

/// Process Launcher trait
///
/// Implementations:
/// - SubprocessLauncher: spawns the external runtime and blocks until it exits
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start the process described by `spec` and wait for it to terminate
    ///
    /// No timeout is applied; the call returns only once the child has exited.
    ///
    /// # Errors
    /// - LaunchError::NotFound if the program is not on the execution path
    /// - LaunchError::PermissionDenied if the program cannot be executed
    /// - LaunchError::SpawnFailed for any other start failure
    async fn launch(&self, spec: &LaunchSpec) -> Result<ExitReport, LaunchError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock launcher behavior
    #[derive(Debug, Clone)]
    pub enum MockBehavior {
        /// Child exits 0
        Success,
        /// Child exits with the given code
        ExitCode(i32),
        /// Child is killed by a signal (no exit code)
        Signaled,
        /// Runtime is not on the execution path
        NotFound,
    }

    /// Mock Process Launcher for testing
    pub struct MockProcessLauncher {
        behavior: Arc<Mutex<MockBehavior>>,
        launched: Arc<Mutex<Vec<LaunchSpec>>>,
        journal: Option<Arc<Mutex<Vec<String>>>>,
    }

    impl MockProcessLauncher {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior: Arc::new(Mutex::new(behavior)),
                launched: Arc::new(Mutex::new(Vec::new())),
                journal: None,
            }
        }
        pub fn new_success() -> Self {
            Self::new(MockBehavior::Success)
        }
        pub fn new_exit_code(code: i32) -> Self {
            Self::new(MockBehavior::ExitCode(code))
        }
        pub fn new_not_found() -> Self {
            Self::new(MockBehavior::NotFound)
        }
        /// Record a "launch" entry in a shared event journal (ordering tests)
        pub fn with_journal(mut self, journal: Arc<Mutex<Vec<String>>>) -> Self {
            self.journal = Some(journal);
            self
        }
        pub fn set_behavior(&self, behavior: MockBehavior) {
            *self.behavior.lock().unwrap() = behavior;
        }
        pub fn call_count(&self) -> usize {
            self.launched.lock().unwrap().len()
        }
        pub fn launched_specs(&self) -> Vec<LaunchSpec> {
            self.launched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessLauncher for MockProcessLauncher {
        async fn launch(&self, spec: &LaunchSpec) -> Result<ExitReport, LaunchError> {
            self.launched.lock().unwrap().push(spec.clone());
            if let Some(journal) = &self.journal {
                journal.lock().unwrap().push("launch".to_string());
            }

            let behavior = self.behavior.lock().unwrap().clone();

            match behavior {
                MockBehavior::Success => Ok(ExitReport::success(100)),
                MockBehavior::ExitCode(0) => Ok(ExitReport::success(100)),
                MockBehavior::ExitCode(code) => Ok(ExitReport::failed(Some(code), 100)),
                MockBehavior::Signaled => Ok(ExitReport::failed(None, 100)),
                MockBehavior::NotFound => Err(LaunchError::NotFound(spec.program.clone())),
            }
        }
    }
}
