//! Variation request
//!
//! [`VariationRequest`] is the typed input of the engine.
//! [`VariationRequestWire`] is the JSON body a transport layer receives;
//! converting it parses axis names and the raw JSON count, so a typed
//! request can only hold the six valid axes and a non-negative count.

use crate::error::EngineError;
use crate::sampler::AxisCandidates;
use crate::variant::Variant;
use prism_model::{StructuredDescription, VariationAxis, DEFAULT_VARIANT_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Typed generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariationRequest {
    base: StructuredDescription,
    locked_axes: BTreeSet<VariationAxis>,
    axis_candidates: Vec<AxisCandidates>,
    count: usize,
}

impl VariationRequest {
    /// Create request over `base` with no axes and the default count
    #[must_use]
    pub fn new(base: StructuredDescription) -> Self {
        Self {
            base,
            locked_axes: BTreeSet::new(),
            axis_candidates: Vec::new(),
            count: DEFAULT_VARIANT_COUNT,
        }
    }

    /// Lock an axis
    #[must_use]
    pub fn lock(mut self, axis: VariationAxis) -> Self {
        self.locked_axes.insert(axis);
        self
    }

    /// Lock several axes
    #[must_use]
    pub fn lock_all(mut self, axes: impl IntoIterator<Item = VariationAxis>) -> Self {
        self.locked_axes.extend(axes);
        self
    }

    /// Offer candidate values for an axis
    #[must_use]
    pub fn vary<I, S>(mut self, axis: VariationAxis, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.axis_candidates.push(AxisCandidates::new(axis, values));
        self
    }

    /// With requested variant count
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Base description
    #[inline]
    #[must_use]
    pub fn base(&self) -> &StructuredDescription {
        &self.base
    }

    /// Locked axes
    #[inline]
    #[must_use]
    pub fn locked_axes(&self) -> &BTreeSet<VariationAxis> {
        &self.locked_axes
    }

    /// Candidates in declaration order, locked axes included
    #[inline]
    #[must_use]
    pub fn axis_candidates(&self) -> &[AxisCandidates] {
        &self.axis_candidates
    }

    /// Requested variant count
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Validate the request and return its free axes in declaration order
    ///
    /// # Errors
    /// Checked in this order: [`EngineError::InvalidCount`],
    /// [`EngineError::NoCandidates`], [`EngineError::DuplicateAxis`],
    /// [`EngineError::AllAxesLocked`], [`EngineError::EmptyCandidateSet`].
    pub fn free_axes(&self) -> Result<Vec<AxisCandidates>, EngineError> {
        if self.count == 0 {
            return Err(EngineError::InvalidCount(self.count.to_string()));
        }
        if self.axis_candidates.is_empty() {
            return Err(EngineError::NoCandidates);
        }

        let mut seen = BTreeSet::new();
        for candidates in &self.axis_candidates {
            if !seen.insert(candidates.axis()) {
                return Err(EngineError::DuplicateAxis(candidates.axis()));
            }
        }

        let free: Vec<AxisCandidates> = self
            .axis_candidates
            .iter()
            .filter(|c| !self.locked_axes.contains(&c.axis()))
            .cloned()
            .collect();
        if free.is_empty() {
            return Err(EngineError::AllAxesLocked);
        }
        if let Some(empty) = free.iter().find(|c| c.is_empty()) {
            return Err(EngineError::EmptyCandidateSet { axis: empty.axis() });
        }

        tracing::debug!(
            free = free.len(),
            locked = self.locked_axes.len(),
            "Validated variation request"
        );
        Ok(free)
    }
}

/// Candidate list as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSettingWire {
    /// Axis name, e.g. `"colorScheme"`
    pub axis: String,
    /// Raw candidate values
    #[serde(default)]
    pub options: Vec<String>,
}

/// Base description as it appears on the wire
///
/// Either a full analysis object carrying `structured`, or a bare
/// description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BaseWire {
    /// `{ "structured": { ... }, ... }`
    Analysis {
        /// The description to vary
        structured: StructuredDescription,
    },
    /// Bare description object
    Bare(StructuredDescription),
}

impl BaseWire {
    /// The wrapped description
    #[must_use]
    pub fn into_description(self) -> StructuredDescription {
        match self {
            Self::Analysis { structured } | Self::Bare(structured) => structured,
        }
    }
}

/// JSON body of a variation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationRequestWire {
    /// Base description (`basePrompt` or `base`)
    #[serde(alias = "base")]
    pub base_prompt: BaseWire,
    /// Locked axis names
    #[serde(default)]
    pub locked_axes: Vec<String>,
    /// Candidate lists in declaration order
    #[serde(default)]
    pub variation_settings: Vec<AxisSettingWire>,
    /// Requested variant count, any JSON value until converted
    #[serde(default = "default_count")]
    pub count: serde_json::Value,
}

fn default_count() -> serde_json::Value {
    serde_json::Value::from(DEFAULT_VARIANT_COUNT)
}

impl TryFrom<VariationRequestWire> for VariationRequest {
    type Error = EngineError;

    fn try_from(wire: VariationRequestWire) -> Result<Self, Self::Error> {
        let count = wire
            .count
            .as_u64()
            .and_then(|c| usize::try_from(c).ok())
            .filter(|c| *c > 0)
            .ok_or_else(|| EngineError::InvalidCount(wire.count.to_string()))?;

        let locked = wire
            .locked_axes
            .iter()
            .map(|name| name.parse::<VariationAxis>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut request = VariationRequest::new(wire.base_prompt.into_description())
            .lock_all(locked)
            .with_count(count);
        for setting in wire.variation_settings {
            let axis: VariationAxis = setting.axis.parse()?;
            request = request.vary(axis, setting.options);
        }
        Ok(request)
    }
}

/// JSON body of a successful variation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationResponse {
    /// Variants in sampling order
    pub variations: Vec<Variant>,
}
