// Subprocess launcher implementation
// reason: async-trait, tokio for process management
use async_trait::async_trait;
use std::io;
use std::process::{ExitStatus, Stdio};
use std::sync::Arc;
use tokio::process::Command;
use tracing::{info, warn};

use benzene_launcher_core::domain::LaunchSpec;
use benzene_launcher_core::port::{ExitReport, LaunchError, ProcessLauncher, TimeProvider};

/// Subprocess launcher
///
/// Starts the external runtime with inherited stdio, so the server's own console output
/// reaches the operator, and blocks until it exits. No timeout, no cancellation.
pub struct SubprocessLauncher {
    time_provider: Arc<dyn TimeProvider>,
}

impl SubprocessLauncher {
    /// Create a new subprocess launcher
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self { time_provider }
    }

    /// Classify a spawn error into the launch failure taxonomy
    fn map_spawn_error(spec: &LaunchSpec, err: io::Error) -> LaunchError {
        let detail = format!("{}: {}", spec.program, err);
        match err.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound(detail),
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied(detail),
            _ => LaunchError::SpawnFailed(detail),
        }
    }

    /// Build exit report from the child's termination status
    fn build_report(status: ExitStatus, duration_ms: i64) -> ExitReport {
        if status.success() {
            ExitReport::success(duration_ms)
        } else {
            // code() is None when the child was terminated by a signal
            ExitReport::failed(status.code(), duration_ms)
        }
    }
}

#[async_trait]
impl ProcessLauncher for SubprocessLauncher {
    async fn launch(&self, spec: &LaunchSpec) -> Result<ExitReport, LaunchError> {
        let args = spec.argv();
        let start_time = self.time_provider.now_millis();

        info!(
            program = %spec.program,
            args = ?args,
            working_dir = %spec.working_dir.display(),
            "Starting subprocess"
        );

        let mut child = Command::new(&spec.program)
            .args(&args)
            .current_dir(&spec.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Self::map_spawn_error(spec, e))?;

        let pid = child.id();
        info!(pid = ?pid, "Subprocess running, waiting for exit");

        let status = child.wait().await.map_err(|e| {
            warn!(pid = ?pid, error = %e, "Waiting on subprocess failed");
            LaunchError::Wait(e.to_string())
        })?;

        let duration_ms = self.time_provider.now_millis() - start_time;
        let report = Self::build_report(status, duration_ms);

        info!(
            program = %spec.program,
            duration_ms = %duration_ms,
            exit_code = ?report.exit_code,
            status = ?report.status,
            "Subprocess completed"
        );

        Ok(report)
    }
}
