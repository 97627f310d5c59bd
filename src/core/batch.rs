//! Inactivation batch types and manifest loading
//!
//! A batch is described by a manifest file (YAML or JSON) naming the target
//! branch and one entry per concept to inactivate. The manifest is loaded at
//! invocation time, replacing any compiled-in concept list.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::concept::{AssociationTargets, BranchPath, ConceptId};
use crate::utils::error::{Result, ServiceError};

/// Intended inactivation metadata for one concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivationRequest {
    /// Concept to inactivate
    pub id: ConceptId,
    /// Inactivation reason tag, e.g. `OUTDATED`
    pub indicator: String,
    /// Replacement links keyed by relationship-type tag; may be empty
    #[serde(default, skip_serializing_if = "AssociationTargets::is_empty")]
    pub associations: AssociationTargets,
}

/// A full batch: target branch plus the per-concept requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InactivationManifest {
    pub branch: BranchPath,
    pub concepts: Vec<InactivationRequest>,
}

impl InactivationManifest {
    /// Load a manifest from a YAML or JSON file, dispatching on extension.
    /// YAML is the default format.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let manifest = match path.extension().and_then(OsStr::to_str) {
            Some("json") => serde_json::from_str(&raw)?,
            _ => serde_yaml::from_str(&raw)?,
        };
        Ok(manifest)
    }

    /// Validate the batch input invariants before any store call
    pub fn validate(&self) -> Result<()> {
        validate_requests(&self.concepts)
    }
}

/// Check the batch input invariants: a non-empty request set, unique ids,
/// non-empty indicator tags, and no empty association target sets.
pub fn validate_requests(requests: &[InactivationRequest]) -> Result<()> {
    if requests.is_empty() {
        return Err(ServiceError::Validation(
            "batch contains no inactivation requests".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(requests.len());
    for request in requests {
        if !seen.insert(request.id) {
            return Err(ServiceError::Validation(format!(
                "duplicate concept id {} in batch",
                request.id
            )));
        }
        if request.indicator.trim().is_empty() {
            return Err(ServiceError::Validation(format!(
                "empty inactivation indicator for concept {}",
                request.id
            )));
        }
        for (kind, targets) in request.associations.iter() {
            if targets.is_empty() {
                return Err(ServiceError::Validation(format!(
                    "association {} for concept {} has no targets",
                    kind, request.id
                )));
            }
        }
    }
    Ok(())
}
