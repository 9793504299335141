use serde::{Deserialize, Serialize};

/// The inferred kind of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Episode,
    Unknown,
}

/// Best-effort metadata inferred from a single filename.
///
/// Fields may be partially populated; `kind` is `Unknown` when the
/// filename carries no usable signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub kind: MediaKind,
    pub title: Option<String>,
    pub year: Option<u16>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl Guess {
    /// A guess carrying no information at all.
    pub fn unknown() -> Self {
        Self {
            kind: MediaKind::Unknown,
            title: None,
            year: None,
            season: None,
            episode: None,
        }
    }

    /// A movie guess with an optional release year.
    pub fn movie(title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            kind: MediaKind::Movie,
            title: Some(title.into()),
            year,
            season: None,
            episode: None,
        }
    }

    /// An episode guess.
    pub fn episode(title: impl Into<String>, season: u32, episode: u32) -> Self {
        Self {
            kind: MediaKind::Episode,
            title: Some(title.into()),
            year: None,
            season: Some(season),
            episode: Some(episode),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == MediaKind::Unknown
    }
}
