//! Engine configuration

use serde::{Deserialize, Serialize};

/// Largest cross-product a single request may span
pub const DEFAULT_MAX_COMBINATIONS: usize = 10_000;

/// Variation engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the free cross-product size
    pub max_combinations: usize,
    /// Fixed RNG seed; `None` draws from OS entropy per call
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With cross-product bound
    #[inline]
    #[must_use]
    pub fn with_max_combinations(mut self, max: usize) -> Self {
        self.max_combinations = max;
        self
    }

    /// With fixed seed for reproducible sampling
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let config = EngineConfig::new().with_max_combinations(64).with_seed(7);
        assert_eq!(config.max_combinations, 64);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.max_combinations, DEFAULT_MAX_COMBINATIONS);
        assert_eq!(config.seed, Some(3));
    }
}
