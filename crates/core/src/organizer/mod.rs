//! Run orchestration.
//!
//! Ties the pipeline together: recency scan of the source root, per-file
//! classification and link placement, then a pruning pass over the
//! destination tree. Per-file failures never abort the run.

mod config;
mod runner;
mod types;

pub use config::OrganizerConfig;
pub use runner::Organizer;
pub use types::{OrganizerError, RunReport};
