use admin_api::cli::{self, Cli};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli).inspect_err(|e| {
        eprintln!("Configuration error: {:#}", e);
    })?;

    cli::init_logger_from_settings(&settings).inspect_err(|e| {
        eprintln!("Logger initialization error: {:#}", e);
    })?;

    if let Err(e) = cli::execute_command(&cli, settings).await {
        tracing::error!(error = ?e, "Command failed");
        return Err(e);
    }

    Ok(())
}
