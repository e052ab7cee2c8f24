use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use seeder::cli::Cli;
use seeder::{Dependencies, SeedingError};
use seeder_pipeline::orchestrator::Orchestrator;
use seeder_shared::types::RunSummary;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Main entry point for the seeding tool.
///
/// Parses the CLI surface, wires dependencies, and runs the orchestrator.
/// The exit code is 0 only when every attempted step reported success.
#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    match run(cli).await {
        Ok(summary) if summary.is_success() => {
            info!("seeding completed successfully");
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            error!(
                "seeding completed with errors: {}/{} steps successful",
                summary.succeeded_steps(),
                summary.steps.len()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("seeding aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunSummary, SeedingError> {
    let deps = Dependencies::new(&cli)?;
    let orchestrator = Orchestrator::new(deps.api, deps.registry, deps.ledger, deps.data);
    Ok(orchestrator.run().await?)
}
