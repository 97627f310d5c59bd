//! Terminology store access
//!
//! [`ConceptStore`] is the seam the processor consumes; [`HttpConceptStore`]
//! is the production implementation against a Snowstorm-style REST surface.

pub mod client;
pub mod types;

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::core::concept::{BranchPath, Concept, ConceptId};
use crate::utils::error::Result;

pub use client::HttpConceptStore;
pub use types::{Page, PageRequest};

/// Repository of concepts, scoped by branch
#[async_trait]
pub trait ConceptStore: Send + Sync {
    /// Fetch the concepts whose ids are in `ids` on `branch`, paged.
    /// Callers wanting the whole result must follow `total` across pages.
    async fn find_concepts(
        &self,
        ids: &BTreeSet<ConceptId>,
        branch: &BranchPath,
        page: PageRequest,
    ) -> Result<Page<Concept>>;

    /// Persist all `concepts` on `branch` in one call. Atomicity is the
    /// store's to define; this tool inherits it.
    async fn submit_update(&self, concepts: &[Concept], branch: &BranchPath) -> Result<()>;
}

#[async_trait]
impl<'a, S: ConceptStore + ?Sized> ConceptStore for &'a S {
    async fn find_concepts(
        &self,
        ids: &BTreeSet<ConceptId>,
        branch: &BranchPath,
        page: PageRequest,
    ) -> Result<Page<Concept>> {
        (**self).find_concepts(ids, branch, page).await
    }

    async fn submit_update(&self, concepts: &[Concept], branch: &BranchPath) -> Result<()> {
        (**self).submit_update(concepts, branch).await
    }
}
