//! Snapshot export
//!
//! Two encodings: pretty JSON mirroring the snapshot, and a flat CSV table
//! with one base row and one row per variant.

use crate::error::ExperimentError;
use crate::snapshot::ExperimentSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// CSV header row
pub const CSV_HEADER: [&str; 3] = ["Name", "Prompt", "Changes"];

/// Export encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// Quoted CSV
    Csv,
}

impl ExportFormat {
    /// File extension without the dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// MIME type
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    /// Encode a snapshot
    ///
    /// # Errors
    /// [`ExperimentError::Json`] on JSON encoding failure.
    pub fn render(self, snapshot: &ExperimentSnapshot) -> Result<String, ExperimentError> {
        match self {
            Self::Json => export_json(snapshot),
            Self::Csv => Ok(export_csv(snapshot)),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Snapshot as pretty JSON
///
/// # Errors
/// [`ExperimentError::Json`] on encoding failure.
pub fn export_json(snapshot: &ExperimentSnapshot) -> Result<String, ExperimentError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Snapshot as CSV
///
/// Every cell is double-quoted with internal quotes doubled. Rows are
/// joined by `\n` with no trailing newline.
#[must_use]
pub fn export_csv(snapshot: &ExperimentSnapshot) -> String {
    let base = [
        "Base".to_string(),
        snapshot.base_prompt().full_prompt.clone(),
        "-".to_string(),
    ];
    let header = CSV_HEADER.map(String::from);

    std::iter::once(header)
        .chain(std::iter::once(base))
        .chain(snapshot.variations().iter().map(|v| {
            [v.name.clone(), v.modified_prompt.clone(), v.changes_summary()]
        }))
        .map(|row| csv_row(&row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Download file name: whitespace runs become `_`, then `_<unix millis>.<ext>`
#[must_use]
pub fn export_file_name(
    snapshot: &ExperimentSnapshot,
    format: ExportFormat,
    at: DateTime<Utc>,
) -> String {
    let stem = snapshot.name().split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_{}.{}", at.timestamp_millis(), format.extension())
}
