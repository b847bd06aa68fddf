// Launch Run Domain Model
// Single-shot lifecycle: Initializing -> Running -> {Succeeded, Failed}

use crate::domain::error::{DomainError, Result};

/// Launch State
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Initializing,
    Running,
    Succeeded,
    Failed,
}

impl LaunchState {
    /// Terminal states have no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, LaunchState::Succeeded | LaunchState::Failed)
    }
}

impl std::fmt::Display for LaunchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchState::Initializing => write!(f, "INITIALIZING"),
            LaunchState::Running => write!(f, "RUNNING"),
            LaunchState::Succeeded => write!(f, "SUCCEEDED"),
            LaunchState::Failed => write!(f, "FAILED"),
        }
    }
}

/// One supervisor invocation
///
/// Owns the state and timestamps of a single launch. A fresh `LaunchRun` is created
/// per invocation, so nothing carries over between runs.
#[derive(Debug, Clone)]
pub struct LaunchRun {
    pub state: LaunchState,
    pub created_at: i64, // epoch ms
    pub started_at: Option<i64>,
    pub finished_at: Option<i64>,
}

impl LaunchRun {
    /// Create a new run in `Initializing` state
    pub fn new(created_at: i64) -> Self {
        Self {
            state: LaunchState::Initializing,
            created_at,
            started_at: None,
            finished_at: None,
        }
    }

    /// Initializing -> Running (child process about to be spawned)
    pub fn start(&mut self, now_millis: i64) -> Result<()> {
        if self.state != LaunchState::Initializing {
            return Err(self.invalid(LaunchState::Running));
        }
        self.state = LaunchState::Running;
        self.started_at = Some(now_millis);
        Ok(())
    }

    /// Running -> Succeeded
    pub fn succeed(&mut self, now_millis: i64) -> Result<()> {
        if self.state != LaunchState::Running {
            return Err(self.invalid(LaunchState::Succeeded));
        }
        self.state = LaunchState::Succeeded;
        self.finished_at = Some(now_millis);
        Ok(())
    }

    /// {Initializing, Running} -> Failed
    ///
    /// Initializing may fail directly when the base directory cannot be resolved.
    pub fn fail(&mut self, now_millis: i64) -> Result<()> {
        if self.state.is_terminal() {
            return Err(self.invalid(LaunchState::Failed));
        }
        self.state = LaunchState::Failed;
        self.finished_at = Some(now_millis);
        Ok(())
    }

    fn invalid(&self, to: LaunchState) -> DomainError {
        DomainError::InvalidStateTransition {
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_lifecycle() {
        let mut run = LaunchRun::new(1000);
        assert_eq!(run.state, LaunchState::Initializing);

        run.start(2000).unwrap();
        assert_eq!(run.state, LaunchState::Running);
        assert_eq!(run.started_at, Some(2000));

        run.succeed(3000).unwrap();
        assert_eq!(run.state, LaunchState::Succeeded);
        assert_eq!(run.finished_at, Some(3000));
        assert!(run.state.is_terminal());
    }

    #[test]
    fn test_fail_from_running() {
        let mut run = LaunchRun::new(1000);
        run.start(2000).unwrap();
        run.fail(3000).unwrap();
        assert_eq!(run.state, LaunchState::Failed);
    }

    #[test]
    fn test_fail_from_initializing() {
        let mut run = LaunchRun::new(1000);
        run.fail(1500).unwrap();
        assert_eq!(run.state, LaunchState::Failed);
        assert!(run.started_at.is_none());
    }

    #[test]
    fn test_no_transition_out_of_terminal_states() {
        let mut run = LaunchRun::new(1000);
        run.start(2000).unwrap();
        run.succeed(3000).unwrap();

        assert!(run.start(4000).is_err());
        assert!(run.fail(4000).is_err());
        assert!(run.succeed(4000).is_err());

        let mut failed = LaunchRun::new(1000);
        failed.fail(2000).unwrap();
        assert!(failed.start(3000).is_err());
        assert!(failed.fail(3000).is_err());
    }

    #[test]
    fn test_cannot_succeed_without_running() {
        let mut run = LaunchRun::new(1000);
        let err = run.succeed(2000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid launch state transition: INITIALIZING -> SUCCEEDED"
        );
    }
}
