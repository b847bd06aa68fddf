// Supervisor - single-shot launch-and-report

use crate::application::console::Console;
use crate::application::constants::{
    DEFAULT_ENTRY_POINT, DEFAULT_RUNTIME, DEFAULT_SUB_COMMAND, FAILURE_EXIT_CODE,
};
use crate::domain::{ConsoleConfig, LaunchRun, LaunchSpec, LaunchState, Locale, Messages};
use crate::error::Result;
use crate::port::{
    BaseDirResolver, ConsoleSetup, ExitReport, OperatorPrompt, ProcessLauncher, TimeProvider,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What to launch and how to talk to the operator
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    pub console: ConsoleConfig,
    pub locale: Locale,
    pub runtime: String,
    pub sub_command: String,
    pub entry_point: String,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            locale: Locale::default(),
            runtime: DEFAULT_RUNTIME.to_string(),
            sub_command: DEFAULT_SUB_COMMAND.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

/// Final result of one supervisor invocation
#[derive(Debug, Clone)]
pub struct SupervisorOutcome {
    /// Always terminal (Succeeded or Failed)
    pub state: LaunchState,
    /// Exit code for the supervisor's own process
    pub exit_code: i32,
    /// Present when the child ran to completion
    pub report: Option<ExitReport>,
    /// Present once the base directory was resolved
    pub base_dir: Option<PathBuf>,
}

impl SupervisorOutcome {
    pub fn is_success(&self) -> bool {
        self.state == LaunchState::Succeeded
    }
}

/// Bootstrap supervisor
///
/// Runs `Initializing -> Running -> {Succeeded, Failed}` exactly once per `run` call.
/// Every failure cause is reported to the operator with the same message.
pub struct Supervisor {
    console_setup: Arc<dyn ConsoleSetup>,
    base_dir: Arc<dyn BaseDirResolver>,
    launcher: Arc<dyn ProcessLauncher>,
    prompt: Arc<dyn OperatorPrompt>,
    time_provider: Arc<dyn TimeProvider>,
    config: SupervisorConfig,
}

impl Supervisor {
    pub fn new(
        console_setup: Arc<dyn ConsoleSetup>,
        base_dir: Arc<dyn BaseDirResolver>,
        launcher: Arc<dyn ProcessLauncher>,
        prompt: Arc<dyn OperatorPrompt>,
        time_provider: Arc<dyn TimeProvider>,
        config: SupervisorConfig,
    ) -> Self {
        Self {
            console_setup,
            base_dir,
            launcher,
            prompt,
            time_provider,
            config,
        }
    }

    /// Run one launch, writing operator output to `out`
    ///
    /// # Errors
    /// Only on an internal state machine violation. Launch failures are reported
    /// through the returned outcome, never as `Err`.
    pub async fn run<W: Write + Send>(&self, out: W) -> Result<SupervisorOutcome> {
        let mut run = LaunchRun::new(self.time_provider.now_millis());

        // 1. Console encoding first, so the banner renders correctly
        let console_config = self.console_setup.apply(self.config.console);
        let messages = Messages::for_console(self.config.locale, &console_config);
        let mut console = Console::new(out, console_config, messages);
        info!(
            encoding = ?console_config.encoding,
            locale = %self.config.locale,
            "Console configured"
        );

        // 2. Banner always precedes the launch attempt
        report_write(console.banner(), "banner");

        // 3. Anchor to the launcher's own directory
        let base_dir = match self.resolve_base_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!(error = %e, "Failed to resolve base directory");
                run.fail(self.time_provider.now_millis())?;
                return Ok(self.finish_failed(&mut console, run, None, None).await);
            }
        };

        let spec = LaunchSpec::new(
            self.config.runtime.clone(),
            self.config.sub_command.clone(),
            self.config.entry_point.clone(),
            base_dir.clone(),
        );
        if let Err(e) = spec.validate() {
            error!(error = %e, "Refusing to launch");
            run.fail(self.time_provider.now_millis())?;
            return Ok(self
                .finish_failed(&mut console, run, None, Some(base_dir))
                .await);
        }

        // 4. Spawn and wait (the only suspension point)
        run.start(self.time_provider.now_millis())?;
        info!(state = %run.state, program = %spec.program, "Launching server process");

        match self.launcher.launch(&spec).await {
            Ok(report) if report.is_success() => {
                run.succeed(self.time_provider.now_millis())?;
                info!(
                    state = %run.state,
                    duration_ms = report.duration_ms,
                    "Server process exited cleanly"
                );
                Ok(SupervisorOutcome {
                    state: run.state,
                    exit_code: 0,
                    report: Some(report),
                    base_dir: Some(base_dir),
                })
            }
            Ok(report) => {
                warn!(exit_code = ?report.exit_code, "Server process exited with failure");
                run.fail(self.time_provider.now_millis())?;
                Ok(self
                    .finish_failed(&mut console, run, Some(report), Some(base_dir))
                    .await)
            }
            Err(e) => {
                error!(error = %e, "Server process could not be started");
                run.fail(self.time_provider.now_millis())?;
                Ok(self
                    .finish_failed(&mut console, run, None, Some(base_dir))
                    .await)
            }
        }
    }

    fn resolve_base_dir(&self) -> Result<PathBuf> {
        let dir = self.base_dir.resolve()?;
        self.base_dir.enter(&dir)?;
        info!(base_dir = %dir.display(), "Working directory set");
        Ok(dir)
    }

    /// Failure message, then (interactive only) prompt and acknowledgment
    async fn finish_failed<W: Write + Send>(
        &self,
        console: &mut Console<W>,
        run: LaunchRun,
        report: Option<ExitReport>,
        base_dir: Option<PathBuf>,
    ) -> SupervisorOutcome {
        report_write(console.failure(), "failure message");

        if self.prompt.is_interactive() {
            report_write(console.prompt(), "prompt");
            if let Err(e) = self.prompt.acknowledge().await {
                warn!(error = %e, "Operator acknowledgment failed");
            }
        } else {
            info!("Non-interactive session, skipping acknowledgment pause");
        }

        let exit_code = report
            .as_ref()
            .and_then(|r| r.exit_code)
            .filter(|code| *code != 0)
            .unwrap_or(FAILURE_EXIT_CODE);

        SupervisorOutcome {
            state: run.state,
            exit_code,
            report,
            base_dir,
        }
    }
}

/// Console write failures never change the outcome
fn report_write(result: io::Result<()>, what: &str) {
    if let Err(e) = result {
        warn!(error = %e, output = what, "Failed to write to console");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConsoleEncoding;
    use crate::port::base_dir::mocks::MockBaseDirResolver;
    use crate::port::console_setup::mocks::MockConsoleSetup;
    use crate::port::operator::mocks::MockOperatorPrompt;
    use crate::port::process_launcher::mocks::{MockBehavior, MockProcessLauncher};
    use crate::port::time_provider::mocks::MockTimeProvider;
    use std::sync::Mutex;

    /// Writer that records each write as a journal entry
    struct JournalWriter(Arc<Mutex<Vec<String>>>);

    impl Write for JournalWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .unwrap()
                .push(format!("write:{}", String::from_utf8_lossy(buf)));
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn english() -> SupervisorConfig {
        SupervisorConfig {
            console: ConsoleConfig {
                encoding: ConsoleEncoding::Utf8,
                color: false,
            },
            locale: Locale::English,
            ..Default::default()
        }
    }

    struct Harness {
        launcher: Arc<MockProcessLauncher>,
        prompt: Arc<MockOperatorPrompt>,
        base_dir: Arc<MockBaseDirResolver>,
        supervisor: Supervisor,
    }

    fn harness(
        launcher: MockProcessLauncher,
        prompt: MockOperatorPrompt,
        base_dir: MockBaseDirResolver,
    ) -> Harness {
        let launcher = Arc::new(launcher);
        let prompt = Arc::new(prompt);
        let base_dir = Arc::new(base_dir);
        let supervisor = Supervisor::new(
            Arc::new(MockConsoleSetup::new()),
            base_dir.clone(),
            launcher.clone(),
            prompt.clone(),
            Arc::new(MockTimeProvider::new(1000, 10)),
            english(),
        );
        Harness {
            launcher,
            prompt,
            base_dir,
            supervisor,
        }
    }

    #[tokio::test]
    async fn test_clean_exit_prints_banner_only() {
        let h = harness(
            MockProcessLauncher::new_success(),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let mut out = Vec::new();
        let outcome = h.supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.state, LaunchState::Succeeded);
        assert_eq!(outcome.exit_code, 0);
        assert!(text.contains("Benzene Oxidation Activity Analysis"));
        assert!(!text.contains("An error occurred."));
        assert!(!text.contains("Press any key"));
        assert_eq!(h.prompt.ack_count(), 0);
    }

    #[tokio::test]
    async fn test_non_zero_exit_reports_and_pauses() {
        let h = harness(
            MockProcessLauncher::new_exit_code(3),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let mut out = Vec::new();
        let outcome = h.supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.state, LaunchState::Failed);
        assert_eq!(outcome.exit_code, 3);
        assert!(text.contains("An error occurred."));
        assert!(text.ends_with("Press any key to continue..."));
        assert_eq!(h.prompt.ack_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_runtime_reports_and_pauses() {
        let h = harness(
            MockProcessLauncher::new_not_found(),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let mut out = Vec::new();
        let outcome = h.supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.state, LaunchState::Failed);
        assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
        assert!(outcome.report.is_none());
        assert!(text.contains("An error occurred."));
        assert_eq!(h.prompt.ack_count(), 1);
    }

    #[tokio::test]
    async fn test_signaled_child_uses_generic_exit_code() {
        let h = harness(
            MockProcessLauncher::new(MockBehavior::Signaled),
            MockOperatorPrompt::new_non_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let outcome = h.supervisor.run(Vec::new()).await.unwrap();
        assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
        assert_eq!(outcome.report.unwrap().exit_code, None);
    }

    #[tokio::test]
    async fn test_non_interactive_failure_skips_pause() {
        let h = harness(
            MockProcessLauncher::new_exit_code(2),
            MockOperatorPrompt::new_non_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let mut out = Vec::new();
        let outcome = h.supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.exit_code, 2);
        assert!(text.contains("An error occurred."));
        assert!(!text.contains("Press any key"));
        assert_eq!(h.prompt.ack_count(), 0);
    }

    #[tokio::test]
    async fn test_launch_is_anchored_at_base_dir() {
        let h = harness(
            MockProcessLauncher::new_success(),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let outcome = h.supervisor.run(Vec::new()).await.unwrap();

        let specs = h.launcher.launched_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].working_dir, PathBuf::from("/opt/benzene"));
        assert_eq!(specs[0].argv(), vec!["run".to_string(), "app.py".to_string()]);
        assert_eq!(h.base_dir.entered(), vec![PathBuf::from("/opt/benzene")]);
        assert_eq!(outcome.base_dir, Some(PathBuf::from("/opt/benzene")));
    }

    #[tokio::test]
    async fn test_unresolvable_base_dir_fails_without_launching() {
        let h = harness(
            MockProcessLauncher::new_success(),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new_failing(),
        );

        let mut out = Vec::new();
        let outcome = h.supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome.state, LaunchState::Failed);
        assert_eq!(outcome.exit_code, FAILURE_EXIT_CODE);
        assert_eq!(h.launcher.call_count(), 0);
        assert!(text.contains("An error occurred."));
        assert_eq!(h.prompt.ack_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_entry_point_fails_without_launching() {
        let launcher = Arc::new(MockProcessLauncher::new_success());
        let supervisor = Supervisor::new(
            Arc::new(MockConsoleSetup::new()),
            Arc::new(MockBaseDirResolver::new("/opt/benzene")),
            launcher.clone(),
            Arc::new(MockOperatorPrompt::new_non_interactive()),
            Arc::new(MockTimeProvider::new(0, 1)),
            SupervisorConfig {
                entry_point: String::new(),
                ..english()
            },
        );

        let outcome = supervisor.run(Vec::new()).await.unwrap();
        assert_eq!(outcome.state, LaunchState::Failed);
        assert_eq!(launcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_banner_precedes_launch_and_failure_precedes_pause() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let h = harness(
            MockProcessLauncher::new_exit_code(1).with_journal(journal.clone()),
            MockOperatorPrompt::new_interactive().with_journal(journal.clone()),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        h.supervisor
            .run(JournalWriter(journal.clone()))
            .await
            .unwrap();

        let entries = journal.lock().unwrap().clone();
        let position = |needle: &str| {
            entries
                .iter()
                .position(|e| e.contains(needle))
                .unwrap_or_else(|| panic!("missing journal entry: {needle}"))
        };

        let banner = position("Benzene Oxidation Activity Analysis");
        let launch = position("launch");
        let failure = position("An error occurred.");
        let prompt = position("Press any key");
        let ack = position("acknowledge");

        assert!(banner < launch);
        assert!(launch < failure);
        assert!(failure < prompt);
        assert!(prompt < ack);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_independent() {
        let h = harness(
            MockProcessLauncher::new_exit_code(4),
            MockOperatorPrompt::new_interactive(),
            MockBaseDirResolver::new("/opt/benzene"),
        );

        let first = h.supervisor.run(Vec::new()).await.unwrap();
        h.launcher.set_behavior(MockBehavior::Success);
        let second = h.supervisor.run(Vec::new()).await.unwrap();

        assert_eq!(first.state, LaunchState::Failed);
        assert_eq!(second.state, LaunchState::Succeeded);
        assert_eq!(second.exit_code, 0);
        assert_eq!(h.launcher.call_count(), 2);
        assert_eq!(h.prompt.ack_count(), 1);
    }

    #[tokio::test]
    async fn test_legacy_console_gets_english_text() {
        let setup = MockConsoleSetup::with_effective(ConsoleConfig {
            encoding: ConsoleEncoding::Native,
            color: false,
        });
        let supervisor = Supervisor::new(
            Arc::new(setup),
            Arc::new(MockBaseDirResolver::new("/opt/benzene")),
            Arc::new(MockProcessLauncher::new_success()),
            Arc::new(MockOperatorPrompt::new_non_interactive()),
            Arc::new(MockTimeProvider::new(0, 1)),
            SupervisorConfig::default(),
        );

        let mut out = Vec::new();
        supervisor.run(&mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Starting application..."));
        assert!(!text.contains("ベンゼン"));
    }
}
