//! Mutator
//!
//! Applies axis/value changes to a description. The input is borrowed and
//! never modified; every call hands back a fresh description.

use crate::error::EngineError;
use crate::sampler::Assignment;
use prism_model::{Attribute, StructuredDescription, VariationAxis};

/// Text written into the description for a raw candidate value
///
/// `"dramatic"` on the lighting axis becomes `"dramatic lighting"`.
#[inline]
#[must_use]
pub fn derived_value(axis: VariationAxis, value: &str) -> String {
    format!("{value} {}", axis.suffix())
}

/// Apply one axis value, returning a new description
///
/// Exactly one attribute differs from `desc`: the one named by `axis`.
#[must_use]
pub fn apply_axis_value(
    desc: &StructuredDescription,
    axis: VariationAxis,
    value: &str,
) -> StructuredDescription {
    desc.with_attribute(axis.attribute(), derived_value(axis, value))
}

/// Apply a value addressed by attribute
///
/// # Errors
/// [`EngineError::InvalidAxis`] if `attr` is not one of the six variation
/// axes. No work is done in that case.
pub fn apply_attribute_value(
    desc: &StructuredDescription,
    attr: Attribute,
    value: &str,
) -> Result<StructuredDescription, EngineError> {
    let axis = VariationAxis::try_from(attr)?;
    Ok(apply_axis_value(desc, axis, value))
}

/// Fold every entry of an assignment into a copy of `desc`
///
/// Axes touch disjoint attributes, so folding order does not matter.
#[must_use]
pub fn apply_assignment(desc: &StructuredDescription, assignment: &Assignment) -> StructuredDescription {
    assignment
        .iter()
        .fold(desc.clone(), |acc, (axis, value)| {
            acc.with_value(axis.attribute(), derived_value(axis, value))
        })
}
