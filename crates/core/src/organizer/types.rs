//! Organizer result and error types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::linker::LinkerError;

/// Summary of one organizer run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
    /// Candidate files inside the recency window.
    pub scanned: u64,
    /// New symlinks created.
    pub linked: u64,
    /// Targets already linked to the same source.
    pub already_linked: u64,
    /// Targets occupied by something else, left untouched.
    pub conflicts: u64,
    /// Candidates skipped (unclassified, filtered extension, unresolvable).
    pub skipped: u64,
    /// Broken symlinks removed by the pruning pass.
    pub pruned: u64,
    /// Per-file and per-entry errors that were logged and skipped.
    pub errors: u64,
}

impl RunReport {
    /// A fresh report stamped with the current time.
    pub fn started_now() -> Self {
        Self {
            started_at: Utc::now(),
            duration_ms: 0,
            scanned: 0,
            linked: 0,
            already_linked: 0,
            conflicts: 0,
            skipped: 0,
            pruned: 0,
            errors: 0,
        }
    }
}

/// Fatal errors for a whole run. Everything per-file is logged, counted in
/// the report and never surfaces here.
#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("Failed to scan source root {root}")]
    ScanFailed {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prune destination root {root}")]
    PruneFailed {
        root: PathBuf,
        #[source]
        source: LinkerError,
    },
}
