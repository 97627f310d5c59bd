//! termbatch - bulk concept inactivation for terminology stores
//!
//! Runs one batch from a manifest file and exits: 0 on success, 1 on any
//! failure, including missing required arguments.

use std::process::ExitCode;

use clap::Parser;
use termbatch::{
    AppConfig, Cli, HttpConceptStore, InactivationManifest, InactivationOutcome,
    InactivationProcessor, Result,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(outcome) => {
            info!(
                updated = outcome.updated.len(),
                skipped = outcome.skipped.len(),
                "batch complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<InactivationOutcome> {
    info!(
        "termbatch {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    );

    let config = AppConfig::from_cli(&cli)?;
    info!("Using host {}", config.store.host);
    info!("Using index prefix {:?}", config.store.index_prefix);

    let manifest = InactivationManifest::from_file(&config.manifest_path)?;
    manifest.validate()?;
    let branch = config
        .branch_override
        .clone()
        .unwrap_or_else(|| manifest.branch.clone());

    let store = HttpConceptStore::new(config.store.clone())?;
    let processor = InactivationProcessor::new(store).with_missing_policy(config.on_missing);
    let outcome = processor.inactivate(&branch, &manifest.concepts).await?;

    // Client and connections are released here by drop, before exit
    Ok(outcome)
}
