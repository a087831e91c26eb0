//! Testing utilities for Prism workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use prism_model::{Attribute, StructuredDescription, VariationAxis};
use proptest::prelude::*;

/// Every attribute populated with distinct, non-sentinel text
pub fn full_description() -> StructuredDescription {
    StructuredDescription::new()
        .with_value(Attribute::VisualStorytelling, "a lone traveler reaches the summit")
        .with_value(Attribute::Composition, "rule of thirds, low angle")
        .with_value(Attribute::DepthOfField, "shallow focus on the subject")
        .with_value(Attribute::Lighting, "overcast daylight")
        .with_value(Attribute::ColorScheme, "muted blues and greys")
        .with_value(Attribute::Objects, "hiker, backpack, rocky ridge")
        .with_value(Attribute::Expression, "determined")
        .with_value(Attribute::Actions, "planting a flag")
        .with_value(Attribute::Style, "documentary photography")
        .with_value(Attribute::Mood, "triumphant")
}

/// Full description with both absence sentinels set
pub fn sentinel_description() -> StructuredDescription {
    full_description()
        .with_value(Attribute::Expression, "N/A")
        .with_value(Attribute::Actions, "static scene")
}

/// Candidate values `"<axis>-0" .. "<axis>-{n-1}"`
pub fn numbered_candidates(axis: VariationAxis, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}-{i}", axis.key())).collect()
}

/// Parse a JSON fixture, panicking on malformed input
pub fn description_from_json(json: &str) -> StructuredDescription {
    StructuredDescription::from_model_response(json).unwrap()
}

/// Attribute text: empty or a few short words
pub fn arb_value() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        6 => "[a-z]{1,8}( [a-z]{1,8}){0,2}",
    ]
}

/// Text for a sentinel-bearing attribute: sometimes the sentinel itself
fn arb_sentinel_value(attr: Attribute) -> BoxedStrategy<String> {
    match attr.sentinel() {
        Some(sentinel) => prop_oneof![1 => Just(sentinel.to_string()), 3 => arb_value()].boxed(),
        None => arb_value().boxed(),
    }
}

/// Arbitrary description over all ten attributes
pub fn arb_description() -> impl Strategy<Value = StructuredDescription> {
    let values: Vec<BoxedStrategy<String>> =
        Attribute::ALL.into_iter().map(arb_sentinel_value).collect();
    values.prop_map(|values| {
        Attribute::ALL
            .into_iter()
            .zip(values)
            .fold(StructuredDescription::new(), |desc, (attr, value)| {
                desc.with_value(attr, value)
            })
    })
}

/// Any of the six variation axes
pub fn arb_axis() -> impl Strategy<Value = VariationAxis> {
    proptest::sample::select(VariationAxis::ALL.to_vec())
}

/// Distinct free axes, each with 1..=`max_values` distinct candidates
pub fn arb_axis_candidates(
    max_axes: usize,
    max_values: usize,
) -> impl Strategy<Value = Vec<(VariationAxis, Vec<String>)>> {
    proptest::sample::subsequence(VariationAxis::ALL.to_vec(), 1..=max_axes.clamp(1, 6))
        .prop_shuffle()
        .prop_flat_map(move |axes| {
            let lists: Vec<_> = axes
                .iter()
                .map(|_| proptest::collection::hash_set("[a-z]{1,6}", 1..=max_values.max(1)))
                .collect();
            (Just(axes), lists)
        })
        .prop_map(|(axes, lists)| {
            axes.into_iter()
                .zip(lists)
                .map(|(axis, set)| {
                    let mut values: Vec<String> = set.into_iter().collect();
                    values.sort();
                    (axis, values)
                })
                .collect()
        })
}
