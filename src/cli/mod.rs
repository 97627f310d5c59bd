//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::core::processor::MissingConceptPolicy;

/// Bulk concept inactivation for a terminology store
#[derive(Parser, Debug)]
#[command(name = "termbatch", version, about)]
pub struct Cli {
    /// Terminology store base URL, e.g. http://localhost:8080
    pub host: String,

    /// Optional index namespace prefix for the store
    pub index_prefix: Option<String>,

    /// Path to the inactivation manifest (YAML or JSON)
    #[arg(long, env = "TERMBATCH_MANIFEST")]
    pub manifest: PathBuf,

    /// Override the branch named in the manifest
    #[arg(long)]
    pub branch: Option<String>,

    /// What to do when a concept id is not found on the branch
    #[arg(long, value_enum, default_value_t = MissingConceptPolicy::Skip)]
    pub on_missing: MissingConceptPolicy,
}
