//! Trait definition for the guessing capability.

use async_trait::async_trait;

use super::types::Guess;

/// A capability that infers media metadata from a filename.
///
/// Implementations are black boxes to the rest of the system: the
/// organizer only interprets the returned `Guess`. Guessing never fails;
/// an unparseable name comes back as `MediaKind::Unknown`.
#[async_trait]
pub trait Guesser: Send + Sync {
    /// Returns the name of this guesser implementation.
    fn name(&self) -> &str;

    /// Infers metadata from a bare filename (not a full path).
    async fn guess(&self, filename: &str) -> Guess;
}
