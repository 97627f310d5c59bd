//! Terminology data model
//!
//! Wire-compatible concept types. Terminology servers in the SNOMED family
//! carry concept identifiers as decimal strings in JSON, so [`ConceptId`]
//! serializes as a string while accepting either string or integer input.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::error::ServiceError;

/// Numeric concept identifier, unique within the terminology namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConceptId(u64);

impl ConceptId {
    /// Create a concept id from its numeric value
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The underlying numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ConceptId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ConceptId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl Serialize for ConceptId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ConceptId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ConceptId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a concept id as a decimal string or integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ConceptId(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Branch path scoping reads and writes, e.g. `MAIN/PROJECT/TASK-1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchPath(String);

impl BranchPath {
    /// Create a branch path, rejecting the empty string
    pub fn new(path: impl Into<String>) -> Result<Self, ServiceError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ServiceError::Validation(
                "branch path must not be empty".to_string(),
            ));
        }
        Ok(Self(path))
    }

    /// The branch path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BranchPath {
    type Error = ServiceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BranchPath> for String {
    fn from(branch: BranchPath) -> Self {
        branch.0
    }
}

/// Typed links from an inactivated concept to its replacement concepts,
/// keyed by relationship-type tag (e.g. `REPLACED_BY`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociationTargets(BTreeMap<String, BTreeSet<ConceptId>>);

impl AssociationTargets {
    /// Empty association map (no replacement links)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a set of target concepts under a relationship-type tag
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        targets: impl IntoIterator<Item = ConceptId>,
    ) {
        self.0.insert(kind.into(), targets.into_iter().collect());
    }

    /// Single-association convenience constructor
    pub fn single(kind: impl Into<String>, target: ConceptId) -> Self {
        let mut map = Self::new();
        map.insert(kind, [target]);
        map
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate associations in deterministic (sorted) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<ConceptId>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A concept as held by the terminology store.
///
/// Only the fields this tool mutates are modeled; everything else the store
/// returns is kept in `extra` so the fetch-merge-submit round trip never
/// strips server-side data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub concept_id: ConceptId,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactivation_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "AssociationTargets::is_empty")]
    pub association_targets: AssociationTargets,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Concept {
    /// An active concept with no inactivation metadata
    pub fn active(id: ConceptId) -> Self {
        Self {
            concept_id: id,
            active: true,
            inactivation_indicator: None,
            association_targets: AssociationTargets::new(),
            extra: serde_json::Map::new(),
        }
    }
}
