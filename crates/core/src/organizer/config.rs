//! Organizer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the run orchestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizerConfig {
    /// When set, the binary loops internally, sleeping this many minutes
    /// between runs, instead of exiting after one run. Scheduling is
    /// otherwise left to an external timer.
    #[serde(default)]
    pub run_interval_minutes: Option<u64>,

    /// Extensions considered for linking (compared case-insensitively,
    /// without the dot). An empty list disables the filter.
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,
}

fn default_video_extensions() -> Vec<String> {
    ["mkv", "mp4", "avi", "mov", "wmv", "flv", "webm", "m4v", "ts"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            run_interval_minutes: None,
            video_extensions: default_video_extensions(),
        }
    }
}

impl OrganizerConfig {
    /// Whether `ext` passes the extension filter.
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.video_extensions.is_empty()
            || self
                .video_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    }
}
