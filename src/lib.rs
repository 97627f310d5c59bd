//! # termbatch
//!
//! Bulk concept-inactivation tool for SNOMED CT terminology stores.
//!
//! Given a manifest naming a branch and a set of concepts with their intended
//! inactivation metadata, termbatch fetches the current state of those
//! concepts, marks each inactive with the requested indicator and association
//! targets, and persists the whole batch as a single update call.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use termbatch::{
//!     HttpConceptStore, InactivationManifest, InactivationProcessor, StoreConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = InactivationManifest::from_file("batch.yaml".as_ref())?;
//!     manifest.validate()?;
//!
//!     let store = HttpConceptStore::new(StoreConfig::new("http://localhost:8080", None))?;
//!     let processor = InactivationProcessor::new(store);
//!     let outcome = processor.inactivate(&manifest.branch, &manifest.concepts).await?;
//!
//!     println!("updated {} concept(s)", outcome.updated.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod store;
pub mod utils;

// Re-export main types
pub use crate::cli::Cli;
pub use crate::config::{AppConfig, StoreConfig};
pub use crate::core::batch::{InactivationManifest, InactivationRequest, validate_requests};
pub use crate::core::concept::{AssociationTargets, BranchPath, Concept, ConceptId};
pub use crate::core::processor::{
    InactivationOutcome, InactivationProcessor, MissingConceptPolicy,
};
pub use crate::store::{ConceptStore, HttpConceptStore, Page, PageRequest};
pub use crate::utils::error::{Result, ServiceError};
