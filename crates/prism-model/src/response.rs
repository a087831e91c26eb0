//! Parsing of vision-model analysis responses
//!
//! The vision model itself is an external collaborator. This module only
//! holds the instructions sent alongside the image and turns the free-text
//! reply back into a [`StructuredDescription`].

use crate::description::StructuredDescription;
use crate::error::ModelError;
use regex::Regex;

/// Instructions sent with an image to obtain a structured description
pub const ANALYSIS_INSTRUCTIONS: &str = r#"You are an expert visual prompt engineer. Analyze this image and extract a structured visual prompt that could recreate it in an AI image generator.

Output a JSON object with these exact fields (provide specific, detailed descriptions):

{
  "visualStorytelling": "Describe the scene narrative and intent - what story is being told",
  "composition": "Describe framing, perspective, focal point, and spatial arrangement",
  "depthOfField": "Describe depth characteristics - shallow/deep, bokeh, focus areas",
  "lighting": "Describe light direction, quality, softness, contrast, and sources",
  "colorScheme": "Describe the color palette, temperature, saturation levels",
  "objects": "List key elements, subjects, foreground/background objects",
  "expression": "Describe any faces, body language, emotional cues (or 'N/A' if none)",
  "actions": "Describe what is happening, movement, activity (or 'static scene' if none)",
  "style": "Describe the visual style - photographic, cinematic, illustrative, etc.",
  "mood": "Describe the emotional tone and atmosphere"
}

Be specific and descriptive. Each field should contain enough detail to recreate this specific look.
Output ONLY the JSON object, no other text."#;

// first '{' through last '}'
const JSON_OBJECT: &str = r"(?s)\{.*\}";

impl StructuredDescription {
    /// Extract and decode the JSON object embedded in a model reply
    ///
    /// # Errors
    /// - [`ModelError::NoJsonObject`] if the text holds no `{ ... }` block
    /// - [`ModelError::Json`] if the block is not a valid description
    pub fn from_model_response(text: &str) -> Result<Self, ModelError> {
        let pattern = Regex::new(JSON_OBJECT)?;
        let block = pattern.find(text).ok_or(ModelError::NoJsonObject)?;
        Ok(serde_json::from_str(block.as_str())?)
    }
}
