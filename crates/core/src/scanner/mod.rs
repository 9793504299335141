//! Recency-filtered scan of the source tree.
//!
//! Walks the source root iteratively and returns every file whose
//! modification time falls within the configured window. Symlinks in the
//! source tree are stat'd through the link, so they behave like the files
//! they point at; symlinked directories are not descended into.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::warn;

/// Returns the files under `root` modified within `window`.
///
/// The window boundary is inclusive: a file whose age equals the window
/// exactly is a candidate. A zero window yields an empty set by definition.
/// Per-entry stat failures are logged and skipped; only a failure to read
/// the root directory itself is an error.
pub async fn recent_files(root: &Path, window: Duration) -> std::io::Result<Vec<PathBuf>> {
    if window.is_zero() {
        return Ok(Vec::new());
    }

    let cutoff = SystemTime::now()
        .checked_sub(window)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut candidates = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if dir == root => return Err(e),
            Err(e) => {
                warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                continue;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", dir.display(), e);
                    break;
                }
            };
            let path = entry.path();

            let file_type = match entry.file_type().await {
                Ok(ft) => ft,
                Err(e) => {
                    warn!("Failed to stat {}: {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                stack.push(path);
                continue;
            }

            // Regular file or symlink: stat through the link. A symlink
            // that resolves to a directory is not a candidate.
            let meta = match fs::metadata(&path).await {
                Ok(meta) => meta,
                Err(e) => {
                    warn!("Failed to stat {}: {}", path.display(), e);
                    continue;
                }
            };
            if !meta.is_file() {
                continue;
            }

            match meta.modified() {
                Ok(mtime) if is_recent(mtime, cutoff) => candidates.push(path),
                Ok(_) => {}
                Err(e) => warn!("No modification time for {}: {}", path.display(), e),
            }
        }
    }

    Ok(candidates)
}

/// Inclusive recency check: modified exactly at the cutoff still counts.
fn is_recent(modified: SystemTime, cutoff: SystemTime) -> bool {
    modified >= cutoff
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{set_file_mtime, FileTime};
    use std::time::UNIX_EPOCH;
    use tempfile::TempDir;

    #[test]
    fn test_boundary_is_inclusive() {
        let cutoff = UNIX_EPOCH + Duration::from_secs(1_000_000);
        assert!(is_recent(cutoff, cutoff));
        assert!(is_recent(cutoff + Duration::from_secs(1), cutoff));
        assert!(!is_recent(cutoff - Duration::from_secs(1), cutoff));
    }

    #[tokio::test]
    async fn test_zero_window_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fresh.mkv"), "x").unwrap();

        let found = recent_files(dir.path(), Duration::ZERO).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_empty_root_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let found = recent_files(dir.path(), Duration::from_secs(3600))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_recent_files_found_recursively() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
        std::fs::write(dir.path().join("top.mkv"), "x").unwrap();
        std::fs::write(dir.path().join("a/b/deep.mkv"), "x").unwrap();

        let found = recent_files(dir.path(), Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.ends_with("top.mkv")));
        assert!(found.iter().any(|p| p.ends_with("a/b/deep.mkv")));
    }

    #[tokio::test]
    async fn test_old_files_excluded() {
        let dir = TempDir::new().unwrap();
        let fresh = dir.path().join("fresh.mkv");
        let stale = dir.path().join("stale.mkv");
        std::fs::write(&fresh, "x").unwrap();
        std::fs::write(&stale, "x").unwrap();

        // Age the stale file two hours past a one-hour window.
        let now = FileTime::now();
        let old = FileTime::from_unix_time(now.unix_seconds() - 2 * 3600, 0);
        set_file_mtime(&stale, old).unwrap();

        let found = recent_files(dir.path(), Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(found, vec![fresh]);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let result = recent_files(Path::new("/nonexistent/root"), Duration::from_secs(60)).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_in_source_treated_as_file() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.mkv");
        let link = dir.path().join("link.mkv");
        std::fs::write(&real, "x").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let found = recent_files(dir.path(), Duration::from_secs(3600))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
    }
}
