//! Prism Experiments
//!
//! Frozen snapshots of a base analysis and its variants, kept in an
//! append-only log and exportable as JSON or CSV.
//!
//! # Core Concepts
//!
//! - [`ExperimentDraft`]: validated builder for a snapshot
//! - [`ExperimentSnapshot`]: immutable once built
//! - [`ExperimentLog`]: newest-first, append-only history
//! - [`export_csv`] / [`export_json`]: export encodings

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod export;
mod log;
mod snapshot;

pub use error::ExperimentError;
pub use export::{export_csv, export_file_name, export_json, ExportFormat, CSV_HEADER};
pub use log::ExperimentLog;
pub use snapshot::{ExperimentDraft, ExperimentId, ExperimentSnapshot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
