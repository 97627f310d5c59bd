//! Paging types for store queries

use serde::{Deserialize, Serialize};

/// One page of a store query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn of(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// A page of results as returned by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matches across all pages
    pub total: u64,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub limit: usize,
}
