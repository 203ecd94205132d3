use std::process::ExitCode;

use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transport_schedule::config::AppConfig;
use transport_schedule::page::render;
use transport_schedule::parser::parse_schedule;
use transport_schedule::source::{SourceClient, SourceClientConfig, format_last_update};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the rendered listing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let client = SourceClient::new(SourceClientConfig::new().with_timeout(config.timeout_secs))?;
    let grid = client.load(&config.source).await?;

    let last_update = grid
        .last_modified
        .map(|dt| format_last_update(&dt.with_timezone(&Local)))
        .unwrap_or_default();

    let schedule = parse_schedule(&grid.rows).with_last_update(last_update);
    info!(
        regular = schedule.regular.len(),
        friday = schedule.friday.len(),
        "Parsed schedule"
    );

    let output = render(&schedule, config.format, config.show_friday, &config.filter)?;

    match &config.output {
        Some(path) => {
            tokio::fs::write(path, output).await?;
            info!(path = %path.display(), "Wrote listing");
        }
        None => println!("{output}"),
    }

    Ok(())
}
