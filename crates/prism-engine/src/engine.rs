//! Variation Engine
//!
//! Orchestrates the sampler, mutator and linearizer. A call is
//! all-or-nothing: every error is raised before the first variant is built.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::linearizer::linearize;
use crate::mutator::apply_assignment;
use crate::request::{VariationRequest, VariationResponse};
use crate::sampler::CombinationSampler;
use crate::variant::{Variant, VariantId};
use prism_model::TargetFormat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Turns variation requests into named, labeled variants
#[derive(Debug, Clone)]
pub struct VariationEngine {
    config: EngineConfig,
    sampler: CombinationSampler,
}

impl VariationEngine {
    /// Create engine from configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let sampler = CombinationSampler::new(config.max_combinations);
        Self { config, sampler }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate variants
    ///
    /// Seeds from [`EngineConfig::seed`] when set, otherwise from OS
    /// entropy.
    ///
    /// # Errors
    /// See [`VariationRequest::free_axes`] and
    /// [`EngineError::CombinationLimitExceeded`].
    pub fn generate(&self, request: &VariationRequest) -> Result<Vec<Variant>, EngineError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate_with_rng(request, &mut rng)
    }

    /// Generate variants with a caller-owned RNG
    ///
    /// # Errors
    /// Same as [`VariationEngine::generate`].
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &VariationRequest,
        rng: &mut R,
    ) -> Result<Vec<Variant>, EngineError> {
        let free = request.free_axes()?;
        let assignments = self.sampler.sample(&free, request.count(), rng)?;

        let variants: Vec<Variant> = assignments
            .into_iter()
            .enumerate()
            .map(|(position, assignment)| {
                let mutated = apply_assignment(request.base(), &assignment);
                Variant {
                    id: VariantId::new(),
                    name: Variant::display_name(position),
                    modified_prompt: linearize(&mutated, TargetFormat::Generic),
                    changelog: assignment.changelog(),
                    changed_axes: assignment,
                }
            })
            .collect();

        tracing::info!(
            requested = request.count(),
            produced = variants.len(),
            free_axes = free.len(),
            "Generated variations"
        );
        Ok(variants)
    }

    /// Generate variants wrapped in the response body
    ///
    /// # Errors
    /// Same as [`VariationEngine::generate`].
    pub fn respond(&self, request: &VariationRequest) -> Result<VariationResponse, EngineError> {
        Ok(VariationResponse {
            variations: self.generate(request)?,
        })
    }
}

impl Default for VariationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
