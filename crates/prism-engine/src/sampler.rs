//! Combination Sampler
//!
//! Enumerates the cross-product of per-axis candidate lists and draws a
//! bounded, duplicate-free random subset of it.
//!
//! # Design
//!
//! The product is never materialized. [`CrossProduct`] is an odometer over
//! per-axis cursors (last axis varies fastest, the same order a
//! depth-first expansion in axis-declaration order produces) and can
//! decode any position directly with [`CrossProduct::assignment_at`].
//! Sampling draws `min(count, P)` distinct positions uniformly with
//! [`rand::seq::index::sample`] and decodes only those, so the cost is
//! `O(count * axes)` regardless of the product size `P`.

use crate::error::EngineError;
use indexmap::IndexMap;
use prism_model::VariationAxis;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free candidate values for one free axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisCandidates {
    axis: VariationAxis,
    #[serde(rename = "options")]
    values: Vec<String>,
}

impl AxisCandidates {
    /// Create a candidate set
    ///
    /// Repeated values are collapsed to their first occurrence so that
    /// every enumerated combination is distinct.
    pub fn new<I, S>(axis: VariationAxis, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if unique.contains(&value) {
                tracing::warn!(axis = %axis, value = %value, "Dropping duplicate candidate");
            } else {
                unique.push(value);
            }
        }
        Self {
            axis,
            values: unique,
        }
    }

    /// Axis these candidates vary
    #[inline]
    #[must_use]
    pub fn axis(&self) -> VariationAxis {
        self.axis
    }

    /// Candidate values in caller order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no candidates
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One point in the cross-product: a single raw value per free axis
///
/// Entries keep axis-declaration order. Serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(IndexMap<VariationAxis, String>);

impl Assignment {
    /// Create empty assignment
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set the value for an axis, returning the previous value
    pub fn insert(&mut self, axis: VariationAxis, value: impl Into<String>) -> Option<String> {
        self.0.insert(axis, value.into())
    }

    /// Raw value chosen for an axis
    #[inline]
    #[must_use]
    pub fn get(&self, axis: VariationAxis) -> Option<&str> {
        self.0.get(&axis).map(String::as_str)
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (VariationAxis, &str)> + '_ {
        self.0.iter().map(|(axis, value)| (*axis, value.as_str()))
    }

    /// Number of axes assigned
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if nothing is assigned
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One `"axis: value"` line per entry, declaration order, raw values
    #[must_use]
    pub fn changelog(&self) -> Vec<String> {
        self.iter()
            .map(|(axis, value)| format!("{}: {value}", axis.key()))
            .collect()
    }
}

impl FromIterator<(VariationAxis, String)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (VariationAxis, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Number of combinations spanned by `axes`
///
/// Zero when there are no axes or any axis is empty. `None` when the
/// product does not fit in `usize`.
#[must_use]
pub fn cross_product_size(axes: &[AxisCandidates]) -> Option<usize> {
    if axes.is_empty() {
        return Some(0);
    }
    axes.iter()
        .try_fold(1usize, |acc, candidates| acc.checked_mul(candidates.len()))
}

/// Lazy enumeration of every assignment over a list of axes
#[derive(Debug, Clone)]
pub struct CrossProduct<'a> {
    axes: &'a [AxisCandidates],
    cursor: Vec<usize>,
    size: Option<usize>,
    remaining: usize,
}

impl<'a> CrossProduct<'a> {
    /// Start enumeration at the first combination
    #[must_use]
    pub fn new(axes: &'a [AxisCandidates]) -> Self {
        let size = cross_product_size(axes);
        Self {
            axes,
            cursor: vec![0; axes.len()],
            size,
            remaining: size.unwrap_or(usize::MAX),
        }
    }

    /// Total number of combinations, `None` past `usize::MAX`
    #[inline]
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Decode the combination at `index` in enumeration order
    #[must_use]
    pub fn assignment_at(&self, index: usize) -> Option<Assignment> {
        if self.size.is_some_and(|size| index >= size) {
            return None;
        }
        let mut digits = vec![0; self.axes.len()];
        let mut rest = index;
        for (digit, candidates) in digits.iter_mut().zip(self.axes).rev() {
            *digit = rest % candidates.len();
            rest /= candidates.len();
        }
        Some(self.assemble(&digits))
    }

    fn assemble(&self, digits: &[usize]) -> Assignment {
        self.axes
            .iter()
            .zip(digits)
            .map(|(candidates, &digit)| (candidates.axis(), candidates.values()[digit].clone()))
            .collect()
    }
}

impl Iterator for CrossProduct<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.assemble(&self.cursor);
        self.remaining -= 1;

        // odometer step, last axis fastest
        for (slot, candidates) in self.cursor.iter_mut().zip(self.axes).rev() {
            *slot += 1;
            if *slot < candidates.len() {
                break;
            }
            *slot = 0;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Bounded sampler over the cross-product of free axes
#[derive(Debug, Clone, Copy)]
pub struct CombinationSampler {
    max_combinations: usize,
}

impl CombinationSampler {
    /// Create sampler with a cross-product bound
    #[inline]
    #[must_use]
    pub fn new(max_combinations: usize) -> Self {
        Self { max_combinations }
    }

    /// Configured cross-product bound
    #[inline]
    #[must_use]
    pub fn max_combinations(&self) -> usize {
        self.max_combinations
    }

    /// Draw `min(count, P)` distinct assignments uniformly at random
    ///
    /// When `count >= P` every combination is returned exactly once, in
    /// random order.
    ///
    /// # Errors
    /// - [`EngineError::AllAxesLocked`] if `axes` is empty
    /// - [`EngineError::InvalidCount`] if `count` is zero
    /// - [`EngineError::EmptyCandidateSet`] if any axis has no values
    /// - [`EngineError::CombinationLimitExceeded`] if `P` exceeds the bound
    /// - [`EngineError::ProductOverflow`] if `P` does not fit in `usize`
    pub fn sample<R: Rng + ?Sized>(
        &self,
        axes: &[AxisCandidates],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Assignment>, EngineError> {
        if axes.is_empty() {
            return Err(EngineError::AllAxesLocked);
        }
        if count == 0 {
            return Err(EngineError::InvalidCount(count.to_string()));
        }
        if let Some(empty) = axes.iter().find(|c| c.is_empty()) {
            return Err(EngineError::EmptyCandidateSet { axis: empty.axis() });
        }

        let product = CrossProduct::new(axes);
        let size = product.size().ok_or(EngineError::ProductOverflow {
            limit: self.max_combinations,
        })?;
        if size > self.max_combinations {
            return Err(EngineError::CombinationLimitExceeded {
                size,
                limit: self.max_combinations,
            });
        }

        let amount = count.min(size);
        tracing::debug!(size, amount, "Sampling combinations");

        Ok(rand::seq::index::sample(rng, size, amount)
            .into_iter()
            .filter_map(|index| product.assignment_at(index))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_test_utils::numbered_candidates;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn axes() -> Vec<AxisCandidates> {
        vec![
            AxisCandidates::new(VariationAxis::Lighting, ["dramatic", "soft natural"]),
            AxisCandidates::new(VariationAxis::Mood, ["calm", "energetic", "romantic"]),
        ]
    }

    fn key(a: &Assignment) -> Vec<(VariationAxis, String)> {
        a.iter().map(|(axis, v)| (axis, v.to_string())).collect()
    }

    #[test]
    fn candidates_drop_duplicates() {
        let c = AxisCandidates::new(VariationAxis::Style, ["vintage", "modern", "vintage"]);
        assert_eq!(c.values(), &["vintage".to_string(), "modern".to_string()]);
    }

    #[test]
    fn size_is_product() {
        assert_eq!(cross_product_size(&axes()), Some(6));
        assert_eq!(cross_product_size(&[]), Some(0));
        let with_empty = vec![
            AxisCandidates::new(VariationAxis::Lighting, ["neon"]),
            AxisCandidates::new(VariationAxis::Mood, Vec::<String>::new()),
        ];
        assert_eq!(cross_product_size(&with_empty), Some(0));
    }

    #[test]
    fn enumeration_is_depth_first() {
        let axes = axes();
        let all: Vec<_> = CrossProduct::new(&axes).map(|a| a.changelog()).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec!["lighting: dramatic", "mood: calm"]);
        assert_eq!(all[1], vec!["lighting: dramatic", "mood: energetic"]);
        assert_eq!(all[3], vec!["lighting: soft natural", "mood: calm"]);
        assert_eq!(all[5], vec!["lighting: soft natural", "mood: romantic"]);
    }

    #[test]
    fn decode_matches_iteration() {
        let axes = axes();
        let product = CrossProduct::new(&axes);
        for (index, assignment) in CrossProduct::new(&axes).enumerate() {
            assert_eq!(product.assignment_at(index), Some(assignment));
        }
        assert_eq!(product.assignment_at(6), None);
    }

    #[test]
    fn count_below_product() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = CombinationSampler::new(100).sample(&axes(), 4, &mut rng).unwrap();
        assert_eq!(out.len(), 4);
        let unique: HashSet<_> = out.iter().map(key).collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn count_above_product_returns_everything() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = CombinationSampler::new(100).sample(&axes(), 50, &mut rng).unwrap();
        let got: HashSet<_> = out.iter().map(key).collect();
        let axes = axes();
        let all: HashSet<_> = CrossProduct::new(&axes).map(|a| key(&a)).collect();
        assert_eq!(out.len(), 6);
        assert_eq!(got, all);
    }

    #[test]
    fn same_seed_same_sample() {
        let sampler = CombinationSampler::new(100);
        let a = sampler.sample(&axes(), 3, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sampler.sample(&axes(), 3, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn limit_is_enforced() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = CombinationSampler::new(5).sample(&axes(), 1, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EngineError::CombinationLimitExceeded { size: 6, limit: 5 }
        ));
    }

    #[test]
    fn large_product_small_count_is_cheap() {
        let wide: Vec<_> = VariationAxis::ALL
            .into_iter()
            .map(|axis| AxisCandidates::new(axis, (0..40).map(|i| format!("v{i}"))))
            .collect();
        // 40^6 = 4_096_000_000 combinations, only 3 decoded
        let mut rng = StdRng::seed_from_u64(4);
        let out = CombinationSampler::new(usize::MAX).sample(&wide, 3, &mut rng).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|a| a.len() == 6));
    }

    #[test]
    fn product_past_usize_is_rejected() {
        // 2000^6 = 6.4e19 > u64::MAX
        let huge: Vec<_> = VariationAxis::ALL
            .into_iter()
            .map(|axis| AxisCandidates::new(axis, numbered_candidates(axis, 2000)))
            .collect();
        assert_eq!(cross_product_size(&huge), None);
        assert_eq!(CrossProduct::new(&huge).size(), None);

        let mut rng = StdRng::seed_from_u64(1);
        let err = CombinationSampler::new(usize::MAX)
            .sample(&huge, 5000, &mut rng)
            .unwrap_err();
        assert!(matches!(err, EngineError::ProductOverflow { limit: usize::MAX }));
    }

    #[test]
    fn unbounded_product_still_decodes() {
        let huge: Vec<_> = VariationAxis::ALL
            .into_iter()
            .map(|axis| AxisCandidates::new(axis, numbered_candidates(axis, 2000)))
            .collect();
        let product = CrossProduct::new(&huge);
        let last = product.assignment_at(usize::MAX).unwrap();
        assert_eq!(last.len(), 6);
        assert_eq!(product.size_hint(), (usize::MAX, Some(usize::MAX)));
    }

    #[test]
    fn failure_conditions() {
        let sampler = CombinationSampler::new(100);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            sampler.sample(&[], 4, &mut rng),
            Err(EngineError::AllAxesLocked)
        ));
        assert!(matches!(
            sampler.sample(&axes(), 0, &mut rng),
            Err(EngineError::InvalidCount(ref got)) if got == "0"
        ));
        let empty = vec![AxisCandidates::new(VariationAxis::Lighting, Vec::<String>::new())];
        assert!(matches!(
            sampler.sample(&empty, 4, &mut rng),
            Err(EngineError::EmptyCandidateSet { axis: VariationAxis::Lighting })
        ));
    }

    #[test]
    fn changelog_uses_raw_values() {
        let mut a = Assignment::new();
        a.insert(VariationAxis::ColorScheme, "warm tones");
        assert_eq!(a.changelog(), vec!["colorScheme: warm tones"]);
    }

    #[test]
    fn assignment_serializes_as_ordered_object() {
        let mut a = Assignment::new();
        a.insert(VariationAxis::Mood, "calm");
        a.insert(VariationAxis::Lighting, "neon");
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"mood":"calm","lighting":"neon"}"#
        );
    }
}
