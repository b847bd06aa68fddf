// Operator acknowledgment adapters
use async_trait::async_trait;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info};

use benzene_launcher_core::domain::PausePolicy;
use benzene_launcher_core::error::Result;
use benzene_launcher_core::port::OperatorPrompt;

/// Blocks until the operator presses any key (or stdin reaches EOF)
///
/// A terminal is switched to raw mode for the duration of the read so a
/// single keypress is enough. Redirected stdin is satisfied by one byte.
pub struct StdinPrompt;

#[async_trait]
impl OperatorPrompt for StdinPrompt {
    fn is_interactive(&self) -> bool {
        true
    }

    async fn acknowledge(&self) -> Result<()> {
        if io::stdin().is_terminal() {
            tokio::task::spawn_blocking(read_single_key)
                .await
                .map_err(io::Error::other)??;
            debug!("Operator acknowledged (key)");
        } else {
            let read = acknowledge_from(tokio::io::stdin()).await?;
            debug!(bytes = read, "Operator acknowledged (stream)");
        }
        Ok(())
    }
}

/// Restores cooked mode even when the read fails
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            debug!(error = %e, "Failed to leave raw mode");
        }
    }
}

fn read_single_key() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let _guard = RawModeGuard;

    loop {
        // Release/repeat events (Windows) do not count as a new press
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Wait for one byte from a non-terminal source; EOF (0 bytes) also counts
async fn acknowledge_from<R: AsyncRead + Unpin>(mut reader: R) -> io::Result<usize> {
    let mut byte = [0u8; 1];
    reader.read(&mut byte).await
}

/// Never blocks (scripted / CI runs)
pub struct NoPrompt;

#[async_trait]
impl OperatorPrompt for NoPrompt {
    fn is_interactive(&self) -> bool {
        false
    }

    async fn acknowledge(&self) -> Result<()> {
        Ok(())
    }
}

/// Pick the prompt for `policy`, checking whether stdin is a terminal
pub fn prompt_for(policy: PausePolicy) -> Arc<dyn OperatorPrompt> {
    select_prompt(policy, io::stdin().is_terminal())
}

fn select_prompt(policy: PausePolicy, stdin_is_terminal: bool) -> Arc<dyn OperatorPrompt> {
    if policy.should_pause(stdin_is_terminal) {
        Arc::new(StdinPrompt)
    } else {
        info!(policy = ?policy, stdin_is_terminal, "Failure pause disabled");
        Arc::new(NoPrompt)
    }
}
