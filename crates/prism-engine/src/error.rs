//! Error types for the variation engine
//!
//! Every error is a caller-input condition detected before any mutation
//! or linearization work begins. None of them is transient: there is no
//! I/O to retry.

use prism_model::{ModelError, VariationAxis};

/// Variation engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Every offered axis is excluded by the locked set
    #[error("all variation axes are locked")]
    AllAxesLocked,

    /// Request carried no axis candidates at all
    #[error("no variation candidates supplied")]
    NoCandidates,

    /// Name or attribute outside the six variation axes
    #[error("invalid variation axis: {0}")]
    InvalidAxis(String),

    /// Free axis with zero candidate values (zero combinations)
    #[error("axis {axis} is free but has no candidate values")]
    EmptyCandidateSet {
        /// The offending axis
        axis: VariationAxis,
    },

    /// Requested variant count is not a positive integer
    ///
    /// Carries the offending value as it was written.
    #[error("variant count must be a positive integer, got {0}")]
    InvalidCount(String),

    /// Same axis offered twice in one request
    #[error("axis {0} listed more than once")]
    DuplicateAxis(VariationAxis),

    /// Cross-product larger than the configured bound
    #[error("cross-product of {size} combinations exceeds limit of {limit}")]
    CombinationLimitExceeded {
        /// Product size
        size: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Cross-product too large to count
    #[error("cross-product size overflows usize and exceeds limit of {limit}")]
    ProductOverflow {
        /// Configured maximum
        limit: usize,
    },

    /// Attribute model error
    #[error(transparent)]
    Model(ModelError),
}

impl EngineError {
    /// Stable identifier for the calling layer
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::AllAxesLocked => "ALL_AXES_LOCKED",
            Self::NoCandidates => "NO_CANDIDATES",
            Self::InvalidAxis(_) => "INVALID_AXIS",
            Self::EmptyCandidateSet { .. } => "EMPTY_CANDIDATE_SET",
            Self::InvalidCount(_) => "INVALID_COUNT",
            Self::DuplicateAxis(_) => "DUPLICATE_AXIS",
            Self::CombinationLimitExceeded { .. } | Self::ProductOverflow { .. } => {
                "COMBINATION_LIMIT_EXCEEDED"
            }
            Self::Model(e) => e.code(),
        }
    }

    /// Check if error is retryable
    ///
    /// Always `false`: retrying the same input yields the same error.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Whether the request can never produce a variant
    #[inline]
    #[must_use]
    pub fn is_zero_combinations(&self) -> bool {
        matches!(self, Self::EmptyCandidateSet { .. })
    }
}

impl From<ModelError> for EngineError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidAxis(name) => Self::InvalidAxis(name),
            ModelError::NotAnAxis(attr) => Self::InvalidAxis(attr.key().to_string()),
            other => Self::Model(other),
        }
    }
}
