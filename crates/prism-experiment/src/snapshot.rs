//! Experiment snapshots
//!
//! A snapshot freezes a base analysis together with the variants generated
//! from it. Fields are only reachable through accessors, so a snapshot
//! cannot change after [`ExperimentDraft::build`].

use crate::error::ExperimentError;
use chrono::{DateTime, Utc};
use prism_engine::{PromptAnalysis, Variant};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique experiment identifier
///
/// Fresh ids are UUID v4. Any string is accepted on input, so snapshots
/// exported with older `test_<millis>` ids still load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentId(String);

impl ExperimentId {
    /// Generate new experiment ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a UUID; `None` for legacy ids
    #[must_use]
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl Default for ExperimentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for ExperimentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ExperimentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable bundle of a base analysis and its variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSnapshot {
    id: ExperimentId,
    name: String,
    created_at: DateTime<Utc>,
    base_image: String,
    base_prompt: PromptAnalysis,
    variations: Vec<Variant>,
    tags: Vec<String>,
}

impl ExperimentSnapshot {
    /// Snapshot identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ExperimentId {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creation timestamp
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reference to the source artifact (URL or data URI)
    #[inline]
    #[must_use]
    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    /// Base analysis the variants were derived from
    #[inline]
    #[must_use]
    pub fn base_prompt(&self) -> &PromptAnalysis {
        &self.base_prompt
    }

    /// Variants in generation order
    #[inline]
    #[must_use]
    pub fn variations(&self) -> &[Variant] {
        &self.variations
    }

    /// Free-form tags
    #[inline]
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Check for a tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Builder for [`ExperimentSnapshot`]
#[derive(Debug, Clone)]
pub struct ExperimentDraft {
    name: String,
    base_image: String,
    base_prompt: PromptAnalysis,
    variations: Vec<Variant>,
    tags: Vec<String>,
}

impl ExperimentDraft {
    /// Start a draft
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        base_image: impl Into<String>,
        base_prompt: PromptAnalysis,
    ) -> Self {
        Self {
            name: name.into(),
            base_image: base_image.into(),
            base_prompt,
            variations: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add a tag; blank and repeated tags are ignored
    #[must_use]
    pub fn tag(mut self, tag: &str) -> Self {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    /// Add several tags
    #[must_use]
    pub fn tags<'a>(self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().fold(self, Self::tag)
    }

    /// With variants
    #[must_use]
    pub fn variations(mut self, variations: Vec<Variant>) -> Self {
        self.variations = variations;
        self
    }

    /// Freeze into a snapshot stamped `now`
    ///
    /// # Errors
    /// - [`ExperimentError::EmptyName`] if the trimmed name is empty
    /// - [`ExperimentError::NoVariations`] if no variants were added
    pub fn build(self, now: DateTime<Utc>) -> Result<ExperimentSnapshot, ExperimentError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExperimentError::EmptyName);
        }
        if self.variations.is_empty() {
            return Err(ExperimentError::NoVariations);
        }
        Ok(ExperimentSnapshot {
            id: ExperimentId::new(),
            name: name.to_string(),
            created_at: now,
            base_image: self.base_image,
            base_prompt: self.base_prompt,
            variations: self.variations,
            tags: self.tags,
        })
    }
}
