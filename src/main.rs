use anyhow::Context;
use clap::Parser;
use tickdown::cli::Cli;
use tickdown::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().context("failed to load configuration")?;

    match init_tracing(&config.logging) {
        Some(path) => tracing::info!(log_file = %path.display(), "Logging initialised"),
        None => eprintln!("tickdown: logging disabled, could not open log file"),
    }

    tickdown::ui::run(config)
        .await
        .context("terminal UI failed")?;
    Ok(())
}
