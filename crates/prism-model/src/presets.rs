//! Preset candidate values offered per variation axis

use crate::attribute::VariationAxis;

/// Axes held fixed when a caller expresses no preference
pub const DEFAULT_LOCKED_AXES: [VariationAxis; 2] =
    [VariationAxis::Composition, VariationAxis::Style];

/// Number of variants requested when a caller expresses no preference
pub const DEFAULT_VARIANT_COUNT: usize = 4;

/// Seven preset candidate values for an axis
#[must_use]
pub fn presets(axis: VariationAxis) -> &'static [&'static str] {
    match axis {
        VariationAxis::Lighting => &[
            "soft natural",
            "dramatic",
            "golden hour",
            "studio",
            "neon",
            "candlelit",
            "overcast",
        ],
        VariationAxis::ColorScheme => &[
            "warm tones",
            "cool tones",
            "monochromatic",
            "vibrant",
            "muted",
            "pastel",
            "high contrast",
        ],
        VariationAxis::Expression => &[
            "neutral",
            "confident",
            "joyful",
            "contemplative",
            "intense",
            "serene",
            "mysterious",
        ],
        VariationAxis::Style => &[
            "photorealistic",
            "cinematic",
            "editorial",
            "minimalist",
            "vintage",
            "modern",
            "artistic",
        ],
        VariationAxis::Mood => &[
            "energetic",
            "calm",
            "dramatic",
            "romantic",
            "professional",
            "playful",
            "mysterious",
        ],
        VariationAxis::Composition => &[
            "centered",
            "rule of thirds",
            "symmetrical",
            "dynamic",
            "minimal",
            "layered",
            "close-up",
        ],
    }
}

/// Candidates pre-selected when an axis is added to a request
#[must_use]
pub fn default_candidates(axis: VariationAxis) -> Vec<String> {
    presets(axis).iter().take(2).map(|s| (*s).to_string()).collect()
}
