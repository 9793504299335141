//! File system linker implementation.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::error::LinkerError;

/// Result of an idempotent link attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// A new symlink was created.
    Created,
    /// A symlink to the same source already occupies the target.
    AlreadyLinked,
    /// Something else occupies the target; it was left untouched.
    Conflict,
}

/// Summary of a pruning pass over the destination tree.
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Broken symlinks that were removed.
    pub removed: Vec<PathBuf>,
    /// Entries that could not be inspected or removed.
    pub errors: u64,
}

/// Creates and prunes symlinks under the destination root.
#[derive(Debug, Default)]
pub struct FsLinker;

impl FsLinker {
    pub fn new() -> Self {
        Self
    }

    /// Ensures a symlink at `target` pointing at `source`.
    ///
    /// `source` must exist and should be absolute so links stay valid
    /// regardless of the working directory. Existing occupants are never
    /// replaced: a matching link is reported as `AlreadyLinked`, anything
    /// else as `Conflict`.
    pub async fn ensure_link(
        &self,
        source: &Path,
        target: &Path,
    ) -> Result<LinkOutcome, LinkerError> {
        if fs::metadata(source).await.is_err() {
            return Err(LinkerError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }

        match fs::symlink_metadata(target).await {
            Ok(meta) if meta.file_type().is_symlink() => {
                if self.points_at(target, source).await? {
                    return Ok(LinkOutcome::AlreadyLinked);
                }
                return Ok(LinkOutcome::Conflict);
            }
            Ok(_) => return Ok(LinkOutcome::Conflict),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(LinkerError::Io(e)),
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                LinkerError::DirectoryCreationFailed {
                    path: parent.to_path_buf(),
                    source: e,
                }
            })?;
        }

        create_symlink(source, target)
            .await
            .map_err(|e| LinkerError::SymlinkFailed {
                target: target.to_path_buf(),
                source: e,
            })?;

        debug!("Linked {} -> {}", target.display(), source.display());
        Ok(LinkOutcome::Created)
    }

    /// Whether the symlink at `link` resolves to `source`.
    async fn points_at(&self, link: &Path, source: &Path) -> Result<bool, LinkerError> {
        let stored = fs::read_link(link).await?;
        if stored == source {
            return Ok(true);
        }

        // Fall back to canonical comparison so relative or chained links
        // to the same file still count as equal.
        match (fs::canonicalize(link).await, fs::canonicalize(source).await) {
            (Ok(a), Ok(b)) => Ok(a == b),
            _ => Ok(false),
        }
    }

    /// Walks `root` and removes every symlink whose target no longer
    /// exists. Non-symlinks and valid links are untouched. Per-entry
    /// failures are logged and counted; the pass continues.
    pub async fn prune_broken(&self, root: &Path) -> Result<PruneReport, LinkerError> {
        let mut report = PruneReport::default();
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if dir == root => return Err(LinkerError::Io(e)),
                Err(e) => {
                    warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                    report.errors += 1;
                    continue;
                }
            };

            loop {
                let entry = match entries.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(e) => {
                        warn!("Failed to read entry in {}: {}", dir.display(), e);
                        report.errors += 1;
                        break;
                    }
                };
                let path = entry.path();

                let file_type = match entry.file_type().await {
                    Ok(ft) => ft,
                    Err(e) => {
                        warn!("Failed to stat {}: {}", path.display(), e);
                        report.errors += 1;
                        continue;
                    }
                };

                if file_type.is_dir() {
                    stack.push(path);
                    continue;
                }
                if !file_type.is_symlink() {
                    continue;
                }

                // Stat through the link to see whether the target resolves.
                match fs::metadata(&path).await {
                    Ok(_) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        match fs::remove_file(&path).await {
                            Ok(()) => {
                                debug!("Removed broken symlink {}", path.display());
                                report.removed.push(path);
                            }
                            Err(e) => {
                                warn!(
                                    "Failed to remove broken symlink {}: {}",
                                    path.display(),
                                    e
                                );
                                report.errors += 1;
                            }
                        }
                    }
                    Err(e) => {
                        warn!("Failed to resolve symlink {}: {}", path.display(), e);
                        report.errors += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}

#[cfg(unix)]
async fn create_symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::symlink(source, target).await
}

#[cfg(windows)]
async fn create_symlink(source: &Path, target: &Path) -> std::io::Result<()> {
    fs::symlink_file(source, target).await
}
