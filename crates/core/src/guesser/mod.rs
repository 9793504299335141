//! Filename metadata guessing.
//!
//! This module provides the `Guesser` trait and a regex-based default
//! implementation for classifying media filenames into movie/episode
//! metadata (title, year, season, episode).
//!
//! Guessing is best-effort: a filename the guesser cannot make sense of
//! yields `MediaKind::Unknown`, never an error. Callers skip unknowns.

mod filename;
mod traits;
mod types;

pub use filename::FilenameGuesser;
pub use traits::Guesser;
pub use types::{Guess, MediaKind};
