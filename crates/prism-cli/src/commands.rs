//! Subcommand implementations
//!
//! Each command takes parsed input and returns the text for stdout, so the
//! binary only handles argument parsing and I/O.

use anyhow::Context;
use prism_engine::{
    linearize, PromptAnalysis, VariationEngine, VariationRequest, VariationRequestWire,
    VariationResponse,
};
use prism_experiment::{ExperimentSnapshot, ExportFormat};
use prism_model::{
    presets::presets, StructuredDescription, TargetFormat, VariationAxis, DEFAULT_LOCKED_AXES,
    DEFAULT_VARIANT_COUNT,
};
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when `path` is `-`
///
/// # Errors
/// Fails on any I/O error.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(Path::new(path)).with_context(|| format!("failed to read {path}"))
}

/// Parse a description from JSON or from a model response wrapping JSON
///
/// # Errors
/// Fails when no JSON object is found or it is malformed.
pub fn parse_description(text: &str) -> anyhow::Result<StructuredDescription> {
    StructuredDescription::from_model_response(text).context("invalid structured description")
}

/// `linearize`: one prompt, or the full analysis as JSON with `all`
///
/// # Errors
/// Fails only on JSON encoding.
pub fn linearize_command(
    desc: &StructuredDescription,
    target: TargetFormat,
    all: bool,
) -> anyhow::Result<String> {
    if all {
        let analysis = PromptAnalysis::new(desc.clone(), target);
        return Ok(serde_json::to_string_pretty(&analysis)?);
    }
    Ok(linearize(desc, target))
}

/// Parse a variation request body, applying a count override
///
/// # Errors
/// Fails on malformed JSON, unknown axes or a non-positive count.
pub fn parse_request(text: &str, count: Option<usize>) -> anyhow::Result<VariationRequest> {
    let wire: VariationRequestWire =
        serde_json::from_str(text).context("invalid variation request")?;
    let request = VariationRequest::try_from(wire)?;
    Ok(match count {
        Some(count) => request.with_count(count),
        None => request,
    })
}

/// `vary`: response body as pretty JSON
///
/// # Errors
/// Propagates every engine error.
pub fn vary_command(engine: &VariationEngine, request: &VariationRequest) -> anyhow::Result<String> {
    let response: VariationResponse = engine.respond(request)?;
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Parse a stored snapshot
///
/// # Errors
/// Fails on malformed JSON.
pub fn parse_snapshot(text: &str) -> anyhow::Result<ExperimentSnapshot> {
    serde_json::from_str(text).context("invalid experiment snapshot")
}

/// `export`: encoded snapshot
///
/// # Errors
/// Fails only on JSON encoding.
pub fn export_command(snapshot: &ExperimentSnapshot, format: ExportFormat) -> anyhow::Result<String> {
    Ok(format.render(snapshot)?)
}

/// `presets`: human-readable catalog
#[must_use]
pub fn presets_command() -> String {
    let mut out = String::new();
    for axis in VariationAxis::ALL {
        let locked = if DEFAULT_LOCKED_AXES.contains(&axis) {
            " (locked by default)"
        } else {
            ""
        };
        let _ = writeln!(out, "{} [{}]{locked}", axis.label(), axis.key());
        for preset in presets(axis) {
            let _ = writeln!(out, "  - {preset}");
        }
    }
    let _ = writeln!(out, "Default variant count: {DEFAULT_VARIANT_COUNT}");
    out.push_str("Target formats:");
    for format in TargetFormat::ALL {
        let _ = write!(out, "\n  {}: {}", format.key(), format.description());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_accepts_wrapped_json() {
        let desc = parse_description("Here you go: {\"objects\": \"a kite\", \"mood\": \"free\"} done").unwrap();
        assert_eq!(
            linearize_command(&desc, TargetFormat::Generic, false).unwrap(),
            "a kite. free"
        );
    }

    #[test]
    fn count_override_wins() {
        let request = parse_request(r#"{"base": {}, "count": 2}"#, Some(7)).unwrap();
        assert_eq!(request.count(), 7);
    }

    #[test]
    fn presets_lists_every_axis() {
        let text = presets_command();
        for axis in VariationAxis::ALL {
            assert!(text.contains(axis.key()));
        }
        assert!(text.contains("(locked by default)"));
    }
}
