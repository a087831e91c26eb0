//! Linearizer
//!
//! Deterministic projection of a [`StructuredDescription`] to one prompt
//! string. Attributes are visited in [`Attribute::LINEARIZATION_ORDER`];
//! empty or absent attributes are skipped; the rest are joined with
//! `". "`, then the target format's prefix or suffix is applied.

use prism_model::{Attribute, StructuredDescription, TargetFormat};
use serde::{Deserialize, Serialize};

/// Separator between included attribute fragments
pub const SEPARATOR: &str = ". ";

/// Linearize a description for a target format
///
/// Pure function of its inputs. If every attribute is empty or absent the
/// body is the empty string and only the format decoration remains.
#[must_use]
pub fn linearize(desc: &StructuredDescription, format: TargetFormat) -> String {
    let fragments: Vec<&str> = Attribute::LINEARIZATION_ORDER
        .into_iter()
        .filter_map(|attr| {
            desc.get(attr)
                .filter(|value| !value.is_empty() && attr.sentinel() != Some(*value))
        })
        .collect();
    format.decorate(&fragments.join(SEPARATOR))
}

/// Whether an edit leaves the rendered prompt unchanged
#[inline]
#[must_use]
pub fn is_noop_edit(
    before: &StructuredDescription,
    after: &StructuredDescription,
    format: TargetFormat,
) -> bool {
    linearize(before, format) == linearize(after, format)
}

/// Prompts rendered for every non-generic model
///
/// Missing renderings read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelSpecificPrompts {
    /// Midjourney rendering
    pub midjourney: String,
    /// Stable Diffusion rendering
    pub stable_diffusion: String,
    /// DALL-E rendering
    pub dalle: String,
}

impl ModelSpecificPrompts {
    /// Render all model-specific prompts
    #[must_use]
    pub fn render(desc: &StructuredDescription) -> Self {
        Self {
            midjourney: linearize(desc, TargetFormat::Midjourney),
            stable_diffusion: linearize(desc, TargetFormat::StableDiffusion),
            dalle: linearize(desc, TargetFormat::Dalle),
        }
    }
}

/// A structured description together with its linearizations
///
/// Produced once per analyzed artifact and replaced wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    /// The structured description
    pub structured: StructuredDescription,
    /// Linearization for `target`
    pub full_prompt: String,
    /// Linearizations for each specific model
    #[serde(default)]
    pub model_specific: ModelSpecificPrompts,
    /// Format `full_prompt` was rendered for
    #[serde(default)]
    pub target: TargetFormat,
}

impl PromptAnalysis {
    /// Build an analysis, rendering every linearization
    #[must_use]
    pub fn new(structured: StructuredDescription, target: TargetFormat) -> Self {
        let full_prompt = linearize(&structured, target);
        let model_specific = ModelSpecificPrompts::render(&structured);
        Self {
            structured,
            full_prompt,
            model_specific,
            target,
        }
    }

    /// Replace one attribute and re-render everything
    #[must_use]
    pub fn edit(&self, attr: Attribute, value: impl Into<String>) -> Self {
        Self::new(self.structured.with_attribute(attr, value), self.target)
    }

    /// Re-render for another target format
    #[must_use]
    pub fn retarget(&self, target: TargetFormat) -> Self {
        Self::new(self.structured.clone(), target)
    }
}
