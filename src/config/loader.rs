//! Configuration loading
//!
//! CLI arguments form the base configuration; a small set of environment
//! variables can override connection settings.

use std::env;

use tracing::debug;

use super::models::{AppConfig, StoreConfig};
use crate::cli::Cli;
use crate::core::concept::BranchPath;
use crate::utils::error::{Result, ServiceError};

impl AppConfig {
    /// Build the invocation configuration from parsed CLI arguments,
    /// then apply environment overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut store = StoreConfig::new(&cli.host, cli.index_prefix.as_deref());
        apply_env_overrides(&mut store)?;

        let branch_override = match &cli.branch {
            Some(branch) => Some(BranchPath::new(branch.clone())?),
            None => None,
        };

        Ok(Self {
            store,
            manifest_path: cli.manifest.clone(),
            branch_override,
            on_missing: cli.on_missing,
        })
    }
}

/// Apply `TERMBATCH_*` environment overrides to the store settings
fn apply_env_overrides(store: &mut StoreConfig) -> Result<()> {
    if let Ok(prefix) = env::var("TERMBATCH_INDEX_PREFIX") {
        store.index_prefix = prefix;
    }
    if let Ok(timeout) = env::var("TERMBATCH_TIMEOUT") {
        store.request_timeout_secs = timeout
            .parse()
            .map_err(|e| ServiceError::Config(format!("Invalid request timeout: {}", e)))?;
    }
    if let Ok(timeout) = env::var("TERMBATCH_CONNECT_TIMEOUT") {
        store.connect_timeout_secs = timeout
            .parse()
            .map_err(|e| ServiceError::Config(format!("Invalid connect timeout: {}", e)))?;
    }
    debug!(host = %store.host, "store configuration resolved");
    Ok(())
}
