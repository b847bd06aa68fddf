//! Benzene Launcher - Main Entry Point
//! Prepares the console, starts the analysis server and reports its outcome

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use benzene_launcher_core::application::Supervisor;
use benzene_launcher_core::VERSION;
use benzene_launcher_core::port::time_provider::SystemTimeProvider;
use benzene_launcher_infra_system::{
    prompt_for, ConsoleCodePage, ExecutableDirResolver, SubprocessLauncher,
};
use cli::Cli;

// Single-threaded: the only suspension point is the wait on the child
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Parse optional flags and initialize logging (stderr)
    let cli = Cli::parse();
    logging::init(cli.log_format, cli.verbose)?;

    info!("Benzene launcher v{} starting...", VERSION);

    // 2. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let supervisor = Supervisor::new(
        Arc::new(ConsoleCodePage::new()),
        Arc::new(ExecutableDirResolver::new()),
        Arc::new(SubprocessLauncher::new(time_provider.clone())),
        prompt_for(cli.pause_policy()),
        time_provider,
        cli.supervisor_config(),
    );

    // 3. Launch once and report
    let outcome = supervisor.run(std::io::stdout()).await?;

    info!(
        state = %outcome.state,
        exit_code = outcome.exit_code,
        "Launcher finished"
    );

    if !outcome.is_success() {
        std::process::exit(outcome.exit_code);
    }

    Ok(())
}
