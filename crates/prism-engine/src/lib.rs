//! Prism Variation Engine
//!
//! Combinatorial prompt variation over structured visual descriptions.
//!
//! # Core Concepts
//!
//! - [`linearize`]: deterministic description-to-prompt projection
//! - [`apply_axis_value`]: single-attribute mutation, never in place
//! - [`CombinationSampler`]: bounded, duplicate-free sampling of the
//!   cross-product of free axes
//! - [`VariationEngine`]: request in, named variants out
//!
//! # Example
//!
//! ```rust
//! use prism_engine::{EngineConfig, VariationEngine, VariationRequest};
//! use prism_model::{Attribute, StructuredDescription, VariationAxis};
//!
//! let base = StructuredDescription::new()
//!     .with_value(Attribute::Objects, "a red bicycle")
//!     .with_value(Attribute::Lighting, "flat light");
//!
//! let request = VariationRequest::new(base)
//!     .lock(VariationAxis::Style)
//!     .vary(VariationAxis::Lighting, ["dramatic", "soft natural"])
//!     .vary(VariationAxis::Mood, ["calm", "energetic"])
//!     .with_count(4);
//!
//! let engine = VariationEngine::new(EngineConfig::new().with_seed(7));
//! let variants = engine.generate(&request)?;
//! assert_eq!(variants.len(), 4);
//! assert_eq!(variants[0].changelog.len(), 2);
//! # Ok::<(), prism_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod engine;
mod error;
mod linearizer;
mod mutator;
mod request;
mod sampler;
mod variant;

pub use config::{EngineConfig, DEFAULT_MAX_COMBINATIONS};
pub use engine::VariationEngine;
pub use error::EngineError;
pub use linearizer::{is_noop_edit, linearize, ModelSpecificPrompts, PromptAnalysis, SEPARATOR};
pub use mutator::{apply_assignment, apply_attribute_value, apply_axis_value, derived_value};
pub use request::{
    AxisSettingWire, BaseWire, VariationRequest, VariationRequestWire, VariationResponse,
};
pub use sampler::{cross_product_size, Assignment, AxisCandidates, CombinationSampler, CrossProduct};
pub use variant::{Variant, VariantId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
