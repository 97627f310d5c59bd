//! Configuration models

use std::path::PathBuf;

use crate::core::concept::BranchPath;
use crate::core::processor::MissingConceptPolicy;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the terminology store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the store, no trailing slash
    pub host: String,
    /// Optional index namespace prefix, empty when unset
    pub index_prefix: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl StoreConfig {
    /// Build store settings from a host and optional index prefix.
    /// A trailing slash on the host is stripped.
    pub fn new(host: &str, index_prefix: Option<&str>) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            index_prefix: index_prefix.unwrap_or("").to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Everything one invocation needs
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    /// Path to the inactivation manifest file
    pub manifest_path: PathBuf,
    /// Overrides the branch named in the manifest when set
    pub branch_override: Option<BranchPath>,
    pub on_missing: MissingConceptPolicy,
}
