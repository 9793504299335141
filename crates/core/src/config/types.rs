use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::organizer::OrganizerConfig;

/// Root configuration.
///
/// The three top-level keys map one-to-one onto the `SOURCE`, `DEST_BASE`
/// and `MODIFIED_WITHIN_HOURS` environment variables. The `organizer`
/// section is only reachable through a TOML file (`LINKARR_CONFIG`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Root of the tree scanned for candidate media files.
    pub source: PathBuf,

    /// Root of the tree where symlinks are created, consumed by Jellyfin.
    pub dest_base: PathBuf,

    /// Recency window: only files modified within this many hours are
    /// considered. The boundary is inclusive.
    #[serde(default = "default_window_hours")]
    pub modified_within_hours: u64,

    #[serde(default)]
    pub organizer: OrganizerConfig,
}

fn default_window_hours() -> u64 {
    24
}
