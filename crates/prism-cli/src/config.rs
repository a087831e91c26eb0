//! CLI configuration file

use anyhow::Context;
use prism_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Contents of the optional `--config` TOML file
///
/// ```toml
/// log_filter = "prism_engine=debug"
///
/// [engine]
/// max_combinations = 5000
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// `EnvFilter` directive string
    pub log_filter: String,
    /// Variation engine settings
    pub engine: EngineConfig,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl PrismConfig {
    /// Load from `path`, or defaults when no path is given
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }
}
