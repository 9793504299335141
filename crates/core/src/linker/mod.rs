//! Symlink creation and pruning.
//!
//! This module owns all mutation of the destination tree: idempotent
//! creation of symlinks at resolved targets, and removal of symlinks whose
//! targets no longer exist.
//!
//! # Invariants
//!
//! - An existing link to the same source is a no-op.
//! - An existing link to a different source (or any non-symlink occupant)
//!   is never overwritten; the conflict is surfaced as an outcome.
//! - After a pruning pass, every symlink under the root resolves.

mod error;
mod fs_linker;

pub use error::LinkerError;
pub use fs_linker::{FsLinker, LinkOutcome, PruneReport};
