//! Error types for the attribute model

use crate::attribute::Attribute;

/// Errors raised while interpreting attribute names, formats and
/// model responses.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Name does not denote one of the six variation axes
    #[error("invalid variation axis: {0}")]
    InvalidAxis(String),

    /// Attribute exists but is not eligible for variation
    #[error("attribute {0} is not a variation axis")]
    NotAnAxis(Attribute),

    /// Name does not denote one of the ten description attributes
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Name does not denote a known target format
    #[error("unknown target format: {0}")]
    UnknownTargetFormat(String),

    /// Model response contained no JSON object
    #[error("no JSON object found in model response")]
    NoJsonObject,

    /// Response pattern failed to compile
    #[error("response pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Model response JSON could not be decoded
    #[error("malformed description JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Stable identifier for the calling layer
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAxis(_) | Self::NotAnAxis(_) => "INVALID_AXIS",
            Self::UnknownAttribute(_) => "UNKNOWN_ATTRIBUTE",
            Self::UnknownTargetFormat(_) => "UNKNOWN_TARGET_FORMAT",
            Self::NoJsonObject | Self::Pattern(_) => "NO_JSON_OBJECT",
            Self::Json(_) => "MALFORMED_DESCRIPTION",
        }
    }

    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}
