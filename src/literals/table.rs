//! The immutable name → value table produced by the extractor.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::DocvarsError;
use crate::utils::find_similar_names;

/// Mapping from declaration name to its extracted string value.
///
/// Built once by [`extract_literals`](super::extract_literals) and never mutated
/// afterwards. Names are kept sorted so listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LiteralTable {
    entries: BTreeMap<String, String>,
}

impl LiteralTable {
    pub(crate) fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self {
            entries,
        }
    }

    /// Look up a literal, failing loudly when the name is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::MissingKey`] with close matches attached when
    /// `name` was not extracted from the source file.
    pub fn lookup(&self, name: &str) -> Result<&str, DocvarsError> {
        self.entries.get(name).map(String::as_str).ok_or_else(|| DocvarsError::MissingKey {
            name: name.to_string(),
            table: "literal".to_string(),
            suggestions: find_similar_names(name, self.entries.keys().map(String::as_str)),
        })
    }

    /// Optional lookup for callers that handle absence themselves.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
