use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use formclip_lib::bootstrap::{self, AppRuntime};
use formclip_lib::cli::Cli;
use formclip_lib::commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = bootstrap::load_or_default(cli.config.as_deref())?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }
    let resolved = bootstrap::resolve(config)?;

    let log_dir = resolved.log_to_file.then_some(resolved.log_dir.as_path());
    bootstrap::tracing::init_tracing_subscriber(log_dir)?;
    tracing::debug!(config = ?resolved, "configuration resolved");

    let runtime = AppRuntime::new(
        bootstrap::wire_dependencies(&resolved),
        Duration::from_millis(resolved.dispatch_timeout_ms),
    );

    // Unlocked handle: the notifier writes to stdout concurrently.
    let mut stdout = std::io::stdout();
    commands::execute(&runtime, cli.command, &mut stdout).await
}
