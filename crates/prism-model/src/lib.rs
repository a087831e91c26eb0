//! Prism Attribute Model
//!
//! Fixed schema for structured visual descriptions.
//!
//! # Core Concepts
//!
//! - [`Attribute`]: the ten description attributes, in schema and
//!   linearization order
//! - [`VariationAxis`]: the six attributes eligible for variation
//! - [`StructuredDescription`]: ten-attribute record with explicit absence
//! - [`TargetFormat`]: model-specific prompt decoration
//!
//! # Example
//!
//! ```rust
//! use prism_model::{Attribute, StructuredDescription, VariationAxis};
//!
//! let desc = StructuredDescription::new()
//!     .with_value(Attribute::Lighting, "golden hour")
//!     .with_value(Attribute::Expression, "N/A");
//!
//! assert_eq!(desc.expression(), None);
//! assert_eq!(VariationAxis::Lighting.suffix(), "lighting");
//! ```

#![warn(unreachable_pub)]

mod attribute;
mod description;
mod error;
mod format;
pub mod presets;
mod response;

pub use attribute::{Attribute, VariationAxis};
pub use description::StructuredDescription;
pub use error::ModelError;
pub use format::TargetFormat;
pub use presets::{default_candidates, DEFAULT_LOCKED_AXES, DEFAULT_VARIANT_COUNT};
pub use response::ANALYSIS_INSTRUCTIONS;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
