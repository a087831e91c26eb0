//! Structured scene descriptions
//!
//! Provides [`StructuredDescription`], the fixed-shape ten-attribute record
//! that every prompt is derived from.
//!
//! Expression and actions are the only attributes with an absence
//! sentinel. Internally their absence is an explicit `None`; the literal
//! sentinel strings (`"N/A"`, `"static scene"`) only exist at the JSON
//! boundary so stored snapshots stay readable.

use crate::attribute::Attribute;
use serde::{Deserialize, Serialize};

/// Ten-attribute structured description of a visual artifact
///
/// # Invariants
/// - All ten attributes are always present (possibly empty)
/// - Edits never mutate in place; they return a fresh description
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireDescription", into = "WireDescription")]
pub struct StructuredDescription {
    visual_storytelling: String,
    composition: String,
    depth_of_field: String,
    lighting: String,
    color_scheme: String,
    objects: String,
    expression: Option<String>,
    actions: Option<String>,
    style: String,
    mood: String,
}

impl StructuredDescription {
    /// Create an empty description (expression and actions absent)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    ///
    /// For expression and actions, passing the attribute's sentinel marks
    /// the attribute absent.
    #[must_use]
    pub fn with_value(mut self, attr: Attribute, value: impl Into<String>) -> Self {
        self.set(attr, value.into());
        self
    }

    /// Return a copy with exactly one attribute replaced
    ///
    /// This is the user-edit operation: `self` is left untouched.
    #[must_use]
    pub fn with_attribute(&self, attr: Attribute, value: impl Into<String>) -> Self {
        self.clone().with_value(attr, value)
    }

    /// Mark an attribute absent
    ///
    /// Attributes without a sentinel are cleared to the empty string.
    #[must_use]
    pub fn without(mut self, attr: Attribute) -> Self {
        match attr {
            Attribute::Expression => self.expression = None,
            Attribute::Actions => self.actions = None,
            other => self.set(other, String::new()),
        }
        self
    }

    /// Current text of an attribute
    ///
    /// Returns `None` only when a sentinel-bearing attribute is absent.
    /// Empty strings are returned as `Some("")`.
    #[must_use]
    pub fn get(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::VisualStorytelling => Some(&self.visual_storytelling),
            Attribute::Composition => Some(&self.composition),
            Attribute::DepthOfField => Some(&self.depth_of_field),
            Attribute::Lighting => Some(&self.lighting),
            Attribute::ColorScheme => Some(&self.color_scheme),
            Attribute::Objects => Some(&self.objects),
            Attribute::Expression => self.expression.as_deref(),
            Attribute::Actions => self.actions.as_deref(),
            Attribute::Style => Some(&self.style),
            Attribute::Mood => Some(&self.mood),
        }
    }

    /// Whether the attribute carries non-empty text
    #[inline]
    #[must_use]
    pub fn is_present(&self, attr: Attribute) -> bool {
        self.get(attr).is_some_and(|v| !v.is_empty())
    }

    /// Expression, `None` when absent
    #[inline]
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    /// Actions, `None` for a static scene
    #[inline]
    #[must_use]
    pub fn actions(&self) -> Option<&str> {
        self.actions.as_deref()
    }

    /// Iterate `(attribute, text)` in schema order, skipping absent attributes
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(move |attr| self.get(attr).map(|v| (attr, v)))
    }

    fn set(&mut self, attr: Attribute, value: String) {
        let slot = match attr {
            Attribute::Expression => {
                self.expression = Self::presence(attr, value);
                return;
            }
            Attribute::Actions => {
                self.actions = Self::presence(attr, value);
                return;
            }
            Attribute::VisualStorytelling => &mut self.visual_storytelling,
            Attribute::Composition => &mut self.composition,
            Attribute::DepthOfField => &mut self.depth_of_field,
            Attribute::Lighting => &mut self.lighting,
            Attribute::ColorScheme => &mut self.color_scheme,
            Attribute::Objects => &mut self.objects,
            Attribute::Style => &mut self.style,
            Attribute::Mood => &mut self.mood,
        };
        *slot = value;
    }

    fn presence(attr: Attribute, value: String) -> Option<String> {
        if attr.sentinel() == Some(value.as_str()) {
            None
        } else {
            Some(value)
        }
    }
}

/// JSON shape with literal sentinels; missing or null keys become empty
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireDescription {
    visual_storytelling: Option<String>,
    composition: Option<String>,
    depth_of_field: Option<String>,
    lighting: Option<String>,
    color_scheme: Option<String>,
    objects: Option<String>,
    expression: Option<String>,
    actions: Option<String>,
    style: Option<String>,
    mood: Option<String>,
}

impl From<WireDescription> for StructuredDescription {
    fn from(wire: WireDescription) -> Self {
        Self::new()
            .with_value(Attribute::VisualStorytelling, wire.visual_storytelling.unwrap_or_default())
            .with_value(Attribute::Composition, wire.composition.unwrap_or_default())
            .with_value(Attribute::DepthOfField, wire.depth_of_field.unwrap_or_default())
            .with_value(Attribute::Lighting, wire.lighting.unwrap_or_default())
            .with_value(Attribute::ColorScheme, wire.color_scheme.unwrap_or_default())
            .with_value(Attribute::Objects, wire.objects.unwrap_or_default())
            .with_value(Attribute::Expression, wire.expression.unwrap_or_default())
            .with_value(Attribute::Actions, wire.actions.unwrap_or_default())
            .with_value(Attribute::Style, wire.style.unwrap_or_default())
            .with_value(Attribute::Mood, wire.mood.unwrap_or_default())
    }
}

impl From<StructuredDescription> for WireDescription {
    fn from(desc: StructuredDescription) -> Self {
        let sentinel = |attr: Attribute, value: Option<String>| {
            value.or_else(|| attr.sentinel().map(str::to_string))
        };
        Self {
            visual_storytelling: Some(desc.visual_storytelling),
            composition: Some(desc.composition),
            depth_of_field: Some(desc.depth_of_field),
            lighting: Some(desc.lighting),
            color_scheme: Some(desc.color_scheme),
            objects: Some(desc.objects),
            expression: sentinel(Attribute::Expression, desc.expression),
            actions: sentinel(Attribute::Actions, desc.actions),
            style: Some(desc.style),
            mood: Some(desc.mood),
        }
    }
}
