//! Target model formats
//!
//! Each format decorates an already-joined prompt body with a fixed
//! prefix or suffix. The body itself is never altered.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Image-generation model a prompt is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetFormat {
    /// Universal prompt format, no decoration
    #[default]
    Generic,
    /// Midjourney v6, widescreen
    Midjourney,
    /// SDXL-compatible quality tags
    StableDiffusion,
    /// OpenAI image models, imperative prefix
    Dalle,
}

impl TargetFormat {
    /// All formats in display order
    pub const ALL: [TargetFormat; 4] = [
        TargetFormat::Generic,
        TargetFormat::Midjourney,
        TargetFormat::StableDiffusion,
        TargetFormat::Dalle,
    ];

    const MIDJOURNEY_SUFFIX: &'static str = " --v 6 --ar 16:9";
    const STABLE_DIFFUSION_SUFFIX: &'static str = ", highly detailed, 8k, professional";
    const DALLE_PREFIX: &'static str = "Create an image: ";

    /// Wire name
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Midjourney => "midjourney",
            Self::StableDiffusion => "stable-diffusion",
            Self::Dalle => "dalle",
        }
    }

    /// Display name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Generic => "Generic",
            Self::Midjourney => "Midjourney",
            Self::StableDiffusion => "Stable Diffusion",
            Self::Dalle => "DALL-E",
        }
    }

    /// One-line description
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Generic => "Universal prompt format",
            Self::Midjourney => "Optimized for MJ v5/v6",
            Self::StableDiffusion => "SDXL compatible",
            Self::Dalle => "OpenAI format",
        }
    }

    /// Apply the format's prefix or suffix to a joined prompt body
    #[must_use]
    pub fn decorate(self, body: &str) -> String {
        match self {
            Self::Generic => body.to_string(),
            Self::Midjourney => format!("{body}{}", Self::MIDJOURNEY_SUFFIX),
            Self::StableDiffusion => format!("{body}{}", Self::STABLE_DIFFUSION_SUFFIX),
            Self::Dalle => format!("{}{body}", Self::DALLE_PREFIX),
        }
    }
}

impl Display for TargetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TargetFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fmt| fmt.key() == s)
            .ok_or_else(|| ModelError::UnknownTargetFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_is_identity() {
        assert_eq!(TargetFormat::Generic.decorate("a. b"), "a. b");
        assert_eq!(TargetFormat::default(), TargetFormat::Generic);
    }

    #[test]
    fn decorations() {
        assert_eq!(TargetFormat::Midjourney.decorate("x"), "x --v 6 --ar 16:9");
        assert_eq!(
            TargetFormat::StableDiffusion.decorate("x"),
            "x, highly detailed, 8k, professional"
        );
        assert_eq!(TargetFormat::Dalle.decorate("x"), "Create an image: x");
    }

    #[test]
    fn empty_body_still_decorated() {
        assert_eq!(TargetFormat::Dalle.decorate(""), "Create an image: ");
        assert_eq!(TargetFormat::Midjourney.decorate(""), " --v 6 --ar 16:9");
    }

    #[test]
    fn parse_and_serde_agree() {
        for fmt in TargetFormat::ALL {
            let json = serde_json::to_string(&fmt).unwrap();
            assert_eq!(json, format!("\"{}\"", fmt.key()));
            assert_eq!(fmt.key().parse::<TargetFormat>().unwrap(), fmt);
        }
        assert!("sdxl".parse::<TargetFormat>().is_err());
    }
}
