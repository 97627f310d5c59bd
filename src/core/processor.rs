//! Inactivation batch processor
//!
//! Fetch-merge-submit over a [`ConceptStore`]: retrieve the batch's concepts
//! from the target branch, overwrite their status and inactivation metadata in
//! memory, and persist the whole mutated list as a single update call. No
//! retries, no rollback; any store failure aborts the invocation.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info, warn};

use crate::core::batch::{InactivationRequest, validate_requests};
use crate::core::concept::{BranchPath, Concept, ConceptId};
use crate::store::{ConceptStore, PageRequest};
use crate::utils::error::{Result, ServiceError};

/// What to do with concept ids that are absent from the target branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MissingConceptPolicy {
    /// Log and drop missing ids, proceed with the rest
    #[default]
    Skip,
    /// Abort the batch before submitting anything
    Fail,
}

/// Result of a completed batch: which concepts were updated, which were
/// skipped because they were not found on the branch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InactivationOutcome {
    pub updated: Vec<ConceptId>,
    pub skipped: Vec<ConceptId>,
}

/// Batch processor over a concept store
pub struct InactivationProcessor<S> {
    store: S,
    on_missing: MissingConceptPolicy,
}

impl<S: ConceptStore> InactivationProcessor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            on_missing: MissingConceptPolicy::default(),
        }
    }

    /// Set the policy for ids absent from the branch
    pub fn with_missing_policy(mut self, policy: MissingConceptPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    /// Inactivate every concept in `requests` on `branch`.
    ///
    /// Validates the batch, fetches the current concepts, merges the intended
    /// metadata onto them, and submits the merged list in one update call.
    /// Mutation happens only in transient memory until the submit; a failure
    /// at any point leaves the store untouched except by its own semantics
    /// for the single update call.
    pub async fn inactivate(
        &self,
        branch: &BranchPath,
        requests: &[InactivationRequest],
    ) -> Result<InactivationOutcome> {
        validate_requests(requests)?;

        let lookup: HashMap<ConceptId, &InactivationRequest> =
            requests.iter().map(|r| (r.id, r)).collect();
        let ids: BTreeSet<ConceptId> = lookup.keys().copied().collect();

        info!(branch = %branch, batch_size = ids.len(), "fetching concepts for inactivation");
        let fetched = self.fetch_all(&ids, branch).await?;
        debug!(found = fetched.len(), "fetch complete");

        let mut merged = Vec::with_capacity(fetched.len());
        let mut updated = Vec::with_capacity(fetched.len());
        for mut concept in fetched {
            let Some(request) = lookup.get(&concept.concept_id) else {
                warn!(id = %concept.concept_id, "store returned a concept outside the batch, ignoring");
                continue;
            };
            concept.active = false;
            concept.inactivation_indicator = Some(request.indicator.clone());
            concept.association_targets = request.associations.clone();
            updated.push(concept.concept_id);
            merged.push(concept);
        }

        let found: BTreeSet<ConceptId> = updated.iter().copied().collect();
        let skipped: Vec<ConceptId> = ids.difference(&found).copied().collect();
        if !skipped.is_empty() {
            match self.on_missing {
                MissingConceptPolicy::Fail => {
                    return Err(ServiceError::NotFound(format!(
                        "{} concept(s) not found on branch {}: {}",
                        skipped.len(),
                        branch,
                        format_ids(&skipped)
                    )));
                }
                MissingConceptPolicy::Skip => {
                    for id in &skipped {
                        warn!(id = %id, branch = %branch, "concept not found on branch, skipping");
                    }
                }
            }
        }

        if merged.is_empty() {
            info!(branch = %branch, "no matching concepts on branch, nothing to submit");
            return Ok(InactivationOutcome {
                updated,
                skipped,
            });
        }

        self.store.submit_update(&merged, branch).await?;
        info!(
            branch = %branch,
            updated = updated.len(),
            skipped = skipped.len(),
            "inactivation batch submitted"
        );
        Ok(InactivationOutcome { updated, skipped })
    }

    /// Fetch all concepts matching `ids`, first page sized to the whole
    /// batch, then following `total` across further pages so a store that
    /// caps page sizes cannot cause silently missed entries.
    async fn fetch_all(&self, ids: &BTreeSet<ConceptId>, branch: &BranchPath) -> Result<Vec<Concept>> {
        let limit = ids.len();
        let mut concepts: Vec<Concept> = Vec::with_capacity(limit);
        loop {
            let page = self
                .store
                .find_concepts(ids, branch, PageRequest::of(concepts.len(), limit))
                .await?;
            let received = page.items.len();
            concepts.extend(page.items);
            if received == 0 || concepts.len() >= page.total as usize {
                break;
            }
        }
        Ok(concepts)
    }
}

fn format_ids(ids: &[ConceptId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
