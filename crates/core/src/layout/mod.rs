//! Destination path resolution.
//!
//! Maps a `Guess` plus file extension onto the canonical library path the
//! media server expects:
//!
//! - movies:   `Movies/<Title> (<Year>)/<Title> (<Year>).<ext>`
//! - episodes: `TV Shows/<Show>/Season <NN>/<Show> - S<NN>E<EE>.<ext>`
//!
//! Returned paths are relative to the destination root. Season and episode
//! numbers are zero-padded to at least two digits and widen naturally past
//! that (episode 100 renders as `E100`).

use std::path::PathBuf;
use thiserror::Error;

use crate::guesser::{Guess, MediaKind};

/// Library subdirectory for movies.
pub const MOVIES_DIR: &str = "Movies";

/// Library subdirectory for series.
pub const TV_SHOWS_DIR: &str = "TV Shows";

/// Errors resolving a destination path from a guess.
///
/// All of these are per-file conditions; the run skips the file and
/// continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Cannot resolve a destination for an unclassified file")]
    UnknownKind,

    #[error("Guess has no usable title")]
    MissingTitle,

    #[error("Episode guess is missing season or episode number")]
    MissingEpisodeNumbers,
}

/// Resolve the destination-relative link target for a guess.
pub fn resolve_target(guess: &Guess, ext: &str) -> Result<PathBuf, LayoutError> {
    let title = guess
        .title
        .as_deref()
        .and_then(sanitize_component)
        .ok_or(match guess.kind {
            MediaKind::Unknown => LayoutError::UnknownKind,
            _ => LayoutError::MissingTitle,
        })?;

    match guess.kind {
        MediaKind::Movie => {
            let stem = match guess.year {
                Some(year) => format!("{title} ({year})"),
                None => title,
            };
            let mut path = PathBuf::from(MOVIES_DIR);
            path.push(&stem);
            path.push(format!("{stem}.{ext}"));
            Ok(path)
        }
        MediaKind::Episode => {
            let (season, episode) = match (guess.season, guess.episode) {
                (Some(s), Some(e)) => (s, e),
                _ => return Err(LayoutError::MissingEpisodeNumbers),
            };
            let mut path = PathBuf::from(TV_SHOWS_DIR);
            path.push(&title);
            path.push(format!("Season {season:02}"));
            path.push(format!("{title} - S{season:02}E{episode:02}.{ext}"));
            Ok(path)
        }
        MediaKind::Unknown => Err(LayoutError::UnknownKind),
    }
}

/// Strip characters that are illegal in filesystem path components while
/// preserving internal spacing and casing. Returns `None` when nothing
/// usable remains.
fn sanitize_component(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| {
            !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') && !c.is_control()
        })
        .collect();

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
