//! The organizer - drives one scan/link/prune pass over the trees.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::guesser::Guesser;
use crate::layout::resolve_target;
use crate::linker::{FsLinker, LinkOutcome};
use crate::scanner::recent_files;

use super::config::OrganizerConfig;
use super::types::{OrganizerError, RunReport};

/// Sequential scan-classify-link-prune pipeline.
///
/// Each candidate file is independent: classification or linking failures
/// are logged, counted and skipped, never fatal. Only an unreadable source
/// or destination root aborts a run.
pub struct Organizer {
    source: PathBuf,
    dest_base: PathBuf,
    window: Duration,
    config: OrganizerConfig,
    guesser: Arc<dyn Guesser>,
    linker: FsLinker,
}

impl Organizer {
    /// Creates an organizer from the loaded configuration.
    pub fn new(config: &Config, guesser: Arc<dyn Guesser>) -> Self {
        Self {
            source: config.source.clone(),
            dest_base: config.dest_base.clone(),
            window: Duration::from_secs(config.modified_within_hours * 3600),
            config: config.organizer.clone(),
            guesser,
            linker: FsLinker::new(),
        }
    }

    /// Runs one full pass: scan, classify and link each candidate, prune.
    pub async fn run_once(&self) -> Result<RunReport, OrganizerError> {
        let start = Instant::now();
        let mut report = RunReport::started_now();

        // Resolve the source root so created links carry absolute targets
        // that stay valid regardless of the working directory.
        let source_root =
            fs::canonicalize(&self.source)
                .await
                .map_err(|e| OrganizerError::ScanFailed {
                    root: self.source.clone(),
                    source: e,
                })?;

        let candidates = recent_files(&source_root, self.window)
            .await
            .map_err(|e| OrganizerError::ScanFailed {
                root: source_root.clone(),
                source: e,
            })?;
        report.scanned = candidates.len() as u64;
        info!(
            "Found {} candidate file(s) under {}",
            candidates.len(),
            source_root.display()
        );

        for candidate in &candidates {
            self.process_candidate(candidate, &mut report).await;
        }

        let pruned = self
            .linker
            .prune_broken(&self.dest_base)
            .await
            .map_err(|e| OrganizerError::PruneFailed {
                root: self.dest_base.clone(),
                source: e,
            })?;
        report.pruned = pruned.removed.len() as u64;
        report.errors += pruned.errors;

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Run complete: {} linked, {} already linked, {} conflicts, {} skipped, {} pruned, {} errors",
            report.linked,
            report.already_linked,
            report.conflicts,
            report.skipped,
            report.pruned,
            report.errors
        );
        Ok(report)
    }

    /// Classifies one candidate and places its link. Never fails the run.
    async fn process_candidate(&self, path: &Path, report: &mut RunReport) {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                debug!("Skipping file with unusable name: {}", path.display());
                report.skipped += 1;
                return;
            }
        };

        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_ascii_lowercase(),
            None => {
                debug!("Skipping extensionless file: {}", path.display());
                report.skipped += 1;
                return;
            }
        };
        if !self.config.allows_extension(&ext) {
            debug!("Skipping non-video extension: {}", path.display());
            report.skipped += 1;
            return;
        }

        let guess = self.guesser.guess(filename).await;
        if guess.is_unknown() {
            debug!("Skipping unclassified file: {}", path.display());
            report.skipped += 1;
            return;
        }

        let relative_target = match resolve_target(&guess, &ext) {
            Ok(target) => target,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                report.skipped += 1;
                return;
            }
        };
        let target = self.dest_base.join(relative_target);

        match self.linker.ensure_link(path, &target).await {
            Ok(LinkOutcome::Created) => {
                info!("Linked {} -> {}", target.display(), path.display());
                report.linked += 1;
            }
            Ok(LinkOutcome::AlreadyLinked) => {
                debug!("Already linked: {}", target.display());
                report.already_linked += 1;
            }
            Ok(LinkOutcome::Conflict) => {
                warn!(
                    "Target {} is occupied by something else, leaving it untouched (wanted {})",
                    target.display(),
                    path.display()
                );
                report.conflicts += 1;
            }
            Err(e) => {
                warn!("Failed to link {}: {}", path.display(), e);
                report.errors += 1;
            }
        }
    }
}
