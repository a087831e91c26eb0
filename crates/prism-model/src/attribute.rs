//! Attribute model
//!
//! Fixed schema of a structured description:
//! - [`Attribute`]: the ten description attributes
//! - [`VariationAxis`]: the six attributes eligible for combinatorial variation
//!
//! Pure constant data plus lookup. No mutable state.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the ten attributes of a structured description
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    /// Scene narrative and intent
    VisualStorytelling,
    /// Framing, perspective and spatial arrangement
    Composition,
    /// Depth characteristics, bokeh, focus areas
    DepthOfField,
    /// Light direction, quality and sources
    Lighting,
    /// Palette, temperature, saturation
    ColorScheme,
    /// Subjects and foreground/background objects
    Objects,
    /// Faces, body language, emotional cues
    Expression,
    /// Movement and activity
    Actions,
    /// Visual style
    Style,
    /// Emotional tone and atmosphere
    Mood,
}

impl Attribute {
    /// Schema order, used for JSON field order and export shape
    pub const ALL: [Attribute; 10] = [
        Attribute::VisualStorytelling,
        Attribute::Composition,
        Attribute::DepthOfField,
        Attribute::Lighting,
        Attribute::ColorScheme,
        Attribute::Objects,
        Attribute::Expression,
        Attribute::Actions,
        Attribute::Style,
        Attribute::Mood,
    ];

    /// Canonical linearization order
    ///
    /// Subject and semantic content come first, technical and
    /// atmospheric modifiers last.
    pub const LINEARIZATION_ORDER: [Attribute; 10] = [
        Attribute::VisualStorytelling,
        Attribute::Objects,
        Attribute::Actions,
        Attribute::Composition,
        Attribute::Lighting,
        Attribute::ColorScheme,
        Attribute::DepthOfField,
        Attribute::Expression,
        Attribute::Style,
        Attribute::Mood,
    ];

    /// Wire name (camelCase JSON key)
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::VisualStorytelling => "visualStorytelling",
            Self::Composition => "composition",
            Self::DepthOfField => "depthOfField",
            Self::Lighting => "lighting",
            Self::ColorScheme => "colorScheme",
            Self::Objects => "objects",
            Self::Expression => "expression",
            Self::Actions => "actions",
            Self::Style => "style",
            Self::Mood => "mood",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VisualStorytelling => "Visual Storytelling",
            Self::Composition => "Composition",
            Self::DepthOfField => "Depth of Field",
            Self::Lighting => "Lighting",
            Self::ColorScheme => "Color Scheme",
            Self::Objects => "Objects",
            Self::Expression => "Expression",
            Self::Actions => "Actions",
            Self::Style => "Style",
            Self::Mood => "Mood",
        }
    }

    /// Absence sentinel used at the JSON boundary, if this attribute has one
    #[inline]
    #[must_use]
    pub fn sentinel(self) -> Option<&'static str> {
        match self {
            Self::Expression => Some("N/A"),
            Self::Actions => Some("static scene"),
            _ => None,
        }
    }

    /// Whether this attribute may be varied combinatorially
    #[inline]
    #[must_use]
    pub fn is_axis(self) -> bool {
        VariationAxis::try_from(self).is_ok()
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attr| attr.key() == s)
            .ok_or_else(|| ModelError::UnknownAttribute(s.to_string()))
    }
}

/// Attribute eligible for combinatorial variation
///
/// A strict subset of [`Attribute`]. Declaration order here is the
/// canonical axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariationAxis {
    /// Lighting
    Lighting,
    /// Color scheme
    ColorScheme,
    /// Expression
    Expression,
    /// Style
    Style,
    /// Mood
    Mood,
    /// Composition
    Composition,
}

impl VariationAxis {
    /// All six axes in canonical order
    pub const ALL: [VariationAxis; 6] = [
        VariationAxis::Lighting,
        VariationAxis::ColorScheme,
        VariationAxis::Expression,
        VariationAxis::Style,
        VariationAxis::Mood,
        VariationAxis::Composition,
    ];

    /// Description attribute this axis rewrites
    #[inline]
    #[must_use]
    pub fn attribute(self) -> Attribute {
        match self {
            Self::Lighting => Attribute::Lighting,
            Self::ColorScheme => Attribute::ColorScheme,
            Self::Expression => Attribute::Expression,
            Self::Style => Attribute::Style,
            Self::Mood => Attribute::Mood,
            Self::Composition => Attribute::Composition,
        }
    }

    /// Wire name, shared with the attribute it rewrites
    #[inline]
    #[must_use]
    pub fn key(self) -> &'static str {
        self.attribute().key()
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        self.attribute().label()
    }

    /// Word appended to a raw candidate so it reads grammatically
    /// inside the final prompt ("dramatic" -> "dramatic lighting").
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Lighting => "lighting",
            Self::ColorScheme => "color palette",
            Self::Expression => "expression",
            Self::Style => "style",
            Self::Mood => "mood",
            Self::Composition => "composition",
        }
    }
}

impl Display for VariationAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<Attribute> for VariationAxis {
    type Error = ModelError;

    fn try_from(attr: Attribute) -> Result<Self, Self::Error> {
        match attr {
            Attribute::Lighting => Ok(Self::Lighting),
            Attribute::ColorScheme => Ok(Self::ColorScheme),
            Attribute::Expression => Ok(Self::Expression),
            Attribute::Style => Ok(Self::Style),
            Attribute::Mood => Ok(Self::Mood),
            Attribute::Composition => Ok(Self::Composition),
            other => Err(ModelError::NotAnAxis(other)),
        }
    }
}

impl From<VariationAxis> for Attribute {
    fn from(axis: VariationAxis) -> Self {
        axis.attribute()
    }
}

impl FromStr for VariationAxis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.key() == s)
            .ok_or_else(|| ModelError::InvalidAxis(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn linearization_order_is_a_permutation() {
        let schema: HashSet<_> = Attribute::ALL.into_iter().collect();
        let linear: HashSet<_> = Attribute::LINEARIZATION_ORDER.into_iter().collect();
        assert_eq!(schema, linear);
        assert_eq!(schema.len(), 10);
    }

    #[test]
    fn only_two_sentinels() {
        let with_sentinel: Vec<_> = Attribute::ALL
            .into_iter()
            .filter(|a| a.sentinel().is_some())
            .collect();
        assert_eq!(with_sentinel, vec![Attribute::Expression, Attribute::Actions]);
        assert_eq!(Attribute::Expression.sentinel(), Some("N/A"));
        assert_eq!(Attribute::Actions.sentinel(), Some("static scene"));
    }

    #[test]
    fn axes_are_strict_subset() {
        let axes: Vec<_> = Attribute::ALL.into_iter().filter(|a| a.is_axis()).collect();
        assert_eq!(axes.len(), 6);
        assert!(!Attribute::Objects.is_axis());
        assert!(!Attribute::DepthOfField.is_axis());
    }

    #[test]
    fn axis_round_trips_through_attribute() {
        for axis in VariationAxis::ALL {
            assert_eq!(VariationAxis::try_from(axis.attribute()).unwrap(), axis);
        }
    }

    #[test]
    fn non_axis_attribute_rejected() {
        let err = VariationAxis::try_from(Attribute::Actions).unwrap_err();
        assert!(matches!(err, ModelError::NotAnAxis(Attribute::Actions)));
    }

    #[test]
    fn parse_axis_names() {
        assert_eq!("colorScheme".parse::<VariationAxis>().unwrap(), VariationAxis::ColorScheme);
        assert!(matches!(
            "objects".parse::<VariationAxis>(),
            Err(ModelError::InvalidAxis(name)) if name == "objects"
        ));
    }

    #[test]
    fn parse_attribute_names() {
        assert_eq!("depthOfField".parse::<Attribute>().unwrap(), Attribute::DepthOfField);
        assert!("depth".parse::<Attribute>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&VariationAxis::ColorScheme).unwrap();
        assert_eq!(json, "\"colorScheme\"");
        let attr: Attribute = serde_json::from_str("\"visualStorytelling\"").unwrap();
        assert_eq!(attr, Attribute::VisualStorytelling);
    }

    #[test]
    fn suffixes_are_total() {
        for axis in VariationAxis::ALL {
            assert!(!axis.suffix().is_empty());
        }
        assert_eq!(VariationAxis::ColorScheme.suffix(), "color palette");
    }
}
