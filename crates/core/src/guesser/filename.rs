//! Regex-based filename guesser.
//!
//! Recognizes the release-name conventions that matter for library layout:
//! `SxxEyy` / `NxNN` episode markers and standalone year tokens. Everything
//! it cannot classify comes back as `MediaKind::Unknown`.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;

use super::traits::Guesser;
use super::types::{Guess, MediaKind};

/// "S01E02", "s1e2", "S01.E02" - the dominant episode convention.
static SEASON_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bs(\d{1,2})[\s._-]*e(\d{1,3})\b").unwrap());

/// "2x05" style episode marker. Season capped at two digits so video
/// resolutions like 1920x1080 never match.
static ALT_SEASON_EPISODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})x(\d{2,3})\b").unwrap());

/// Standalone four-digit year token.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

/// Default guesser implementation, driven entirely by the filename.
#[derive(Debug, Default)]
pub struct FilenameGuesser;

impl FilenameGuesser {
    pub fn new() -> Self {
        Self
    }

    fn guess_sync(&self, filename: &str) -> Guess {
        let stem = match Path::new(filename).file_stem().and_then(|s| s.to_str()) {
            Some(s) => s,
            None => return Guess::unknown(),
        };

        if let Some((season, episode, marker_start)) = find_episode_marker(stem) {
            let prefix = &stem[..marker_start];
            let (title, year) = split_trailing_year(prefix);
            return match title {
                Some(title) => Guess {
                    kind: MediaKind::Episode,
                    title: Some(title),
                    year,
                    season: Some(season),
                    episode: Some(episode),
                },
                // Episode marker without a show name is unusable.
                None => Guess::unknown(),
            };
        }

        // No episode marker: a title followed by a year reads as a movie.
        // Take the last year token that still leaves a non-empty title, so
        // "2001.A.Space.Odyssey.1968" resolves to the release year.
        let mut movie: Option<(String, u16)> = None;
        for m in YEAR_RE.find_iter(stem) {
            if let (Some(title), Ok(year)) =
                (normalize_title(&stem[..m.start()]), m.as_str().parse())
            {
                movie = Some((title, year));
            }
        }

        match movie {
            Some((title, year)) => Guess::movie(title, Some(year)),
            None => Guess::unknown(),
        }
    }
}

#[async_trait]
impl Guesser for FilenameGuesser {
    fn name(&self) -> &str {
        "filename"
    }

    async fn guess(&self, filename: &str) -> Guess {
        self.guess_sync(filename)
    }
}

/// Locate an episode marker, returning (season, episode, marker byte offset).
fn find_episode_marker(stem: &str) -> Option<(u32, u32, usize)> {
    for re in [&*SEASON_EPISODE_RE, &*ALT_SEASON_EPISODE_RE] {
        if let Some(caps) = re.captures(stem) {
            let season = caps.get(1)?.as_str().parse().ok()?;
            let episode = caps.get(2)?.as_str().parse().ok()?;
            return Some((season, episode, caps.get(0)?.start()));
        }
    }
    None
}

/// Split a year token off the end of a title prefix, e.g.
/// "Show.2019." -> ("Show", Some(2019)).
fn split_trailing_year(prefix: &str) -> (Option<String>, Option<u16>) {
    if let Some(m) = YEAR_RE.find_iter(prefix).last() {
        let before = &prefix[..m.start()];
        let after = &prefix[m.end()..];
        if normalize_title(after).is_none() {
            if let Some(title) = normalize_title(before) {
                return (Some(title), m.as_str().parse().ok());
            }
        }
    }
    (normalize_title(prefix), None)
}

/// Turn a raw filename fragment into a displayable title: dots and
/// underscores become spaces, separator dashes and extra whitespace are
/// dropped, casing is preserved. Returns `None` when nothing is left.
fn normalize_title(raw: &str) -> Option<String> {
    let replaced: String = raw
        .chars()
        .map(|c| if c == '.' || c == '_' { ' ' } else { c })
        .collect();

    let title = replaced
        .split_whitespace()
        .filter(|word| *word != "-")
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
