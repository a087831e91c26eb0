//! Error types for experiment snapshots

use crate::snapshot::ExperimentId;

/// Experiment error
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// Name empty after trimming
    #[error("experiment name must not be empty")]
    EmptyName,

    /// Snapshot would carry no variants
    #[error("experiment must contain at least one variation")]
    NoVariations,

    /// Id already present in the log
    #[error("experiment {0} already recorded")]
    DuplicateId(ExperimentId),

    /// Lookup miss
    #[error("experiment not found: {0}")]
    NotFound(ExperimentId),

    /// JSON encode/decode failure
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExperimentError {
    /// Stable identifier for the calling layer
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::NoVariations => "NO_VARIATIONS",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Json(_) => "SERIALIZATION",
        }
    }

    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
