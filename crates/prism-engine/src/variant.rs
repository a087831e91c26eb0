//! Variant output types

use crate::sampler::Assignment;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique variant identifier
///
/// Fresh ids are ULIDs, so they sort by creation. Any string is accepted
/// on input, which keeps ids written by earlier tools readable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// Generate new variant ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a ULID; `None` for ids not minted here
    #[must_use]
    pub fn as_ulid(&self) -> Option<Ulid> {
        Ulid::from_string(&self.0).ok()
    }
}

impl Default for VariantId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for VariantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VariantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One generated prompt variation
///
/// Immutable once produced. Ownership passes to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Identifier, unique within and across generation calls
    pub id: VariantId,
    /// 1-based positional display name, e.g. "Variation 2"
    pub name: String,
    /// Raw candidate value chosen per free axis
    pub changed_axes: Assignment,
    /// Linearized mutated description (generic target)
    pub modified_prompt: String,
    /// `"axis: value"` lines, one per entry of `changed_axes`
    pub changelog: Vec<String>,
}

impl Variant {
    /// Display name for the variant at zero-based `position`
    #[inline]
    #[must_use]
    pub fn display_name(position: usize) -> String {
        format!("Variation {}", position + 1)
    }

    /// Changelog joined for tabular export
    #[must_use]
    pub fn changes_summary(&self) -> String {
        self.changelog.join("; ")
    }
}
