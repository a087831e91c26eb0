//! Append-only experiment log

use crate::error::ExperimentError;
use crate::snapshot::{ExperimentId, ExperimentSnapshot};
use serde::{Deserialize, Serialize};

/// Experiment history, newest first
///
/// Snapshots are only ever added. There is no update or removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentLog {
    entries: Vec<ExperimentSnapshot>,
}

impl ExperimentLog {
    /// Create empty log
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot at the head of the log
    ///
    /// # Errors
    /// [`ExperimentError::DuplicateId`] if the id is already recorded.
    pub fn record(&mut self, snapshot: ExperimentSnapshot) -> Result<ExperimentId, ExperimentError> {
        let id = snapshot.id().clone();
        if self.get(&id).is_some() {
            return Err(ExperimentError::DuplicateId(id));
        }
        tracing::info!(
            experiment = %id,
            name = snapshot.name(),
            variations = snapshot.variations().len(),
            "Recorded experiment"
        );
        self.entries.insert(0, snapshot);
        Ok(id)
    }

    /// Look up a snapshot
    #[must_use]
    pub fn get(&self, id: &ExperimentId) -> Option<&ExperimentSnapshot> {
        self.entries.iter().find(|s| s.id() == id)
    }

    /// Look up a snapshot or fail
    ///
    /// # Errors
    /// [`ExperimentError::NotFound`] on a miss.
    pub fn require(&self, id: &ExperimentId) -> Result<&ExperimentSnapshot, ExperimentError> {
        self.get(id).ok_or_else(|| ExperimentError::NotFound(id.clone()))
    }

    /// Snapshots, newest first
    pub fn iter(&self) -> impl Iterator<Item = &ExperimentSnapshot> {
        self.entries.iter()
    }

    /// Snapshots carrying `tag`, newest first
    pub fn tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ExperimentSnapshot> {
        self.entries.iter().filter(move |s| s.has_tag(tag))
    }

    /// Number of snapshots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a JSON array, newest first
    ///
    /// # Errors
    /// [`ExperimentError::Json`] on encoding failure.
    pub fn to_json(&self) -> Result<String, ExperimentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a log written by [`ExperimentLog::to_json`]
    ///
    /// # Errors
    /// [`ExperimentError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ExperimentError> {
        Ok(serde_json::from_str(json)?)
    }
}
