//! Mock guesser for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::guesser::{Guess, Guesser};

/// Mock implementation of the `Guesser` trait.
///
/// Returns canned responses per filename and records every query for test
/// assertions. Filenames without a canned response come back as unknown.
///
/// # Example
///
/// ```rust,ignore
/// use linkarr_core::testing::MockGuesser;
///
/// let guesser = MockGuesser::new();
/// guesser.set_response("a.mkv", Guess::movie("A", Some(2020))).await;
///
/// let guess = guesser.guess("a.mkv").await;
/// assert_eq!(guess.year, Some(2020));
/// assert_eq!(guesser.recorded_queries().await, vec!["a.mkv"]);
/// ```
#[derive(Debug, Default)]
pub struct MockGuesser {
    /// Canned responses keyed by filename.
    responses: Arc<RwLock<HashMap<String, Guess>>>,
    /// Every filename this mock was asked about, in order.
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockGuesser {
    /// Create a new mock guesser with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the guess to return for `filename`.
    pub async fn set_response(&self, filename: &str, guess: Guess) {
        self.responses
            .write()
            .await
            .insert(filename.to_string(), guess);
    }

    /// The filenames queried so far, in call order.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

#[async_trait]
impl Guesser for MockGuesser {
    fn name(&self) -> &str {
        "mock"
    }

    async fn guess(&self, filename: &str) -> Guess {
        self.queries.write().await.push(filename.to_string());
        self.responses
            .read()
            .await
            .get(filename)
            .cloned()
            .unwrap_or_else(Guess::unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_name_is_unknown() {
        let guesser = MockGuesser::new();
        assert!(guesser.guess("whatever.mkv").await.is_unknown());
    }

    #[tokio::test]
    async fn test_canned_response_and_recording() {
        let guesser = MockGuesser::new();
        guesser
            .set_response("a.mkv", Guess::movie("A", Some(2020)))
            .await;

        let guess = guesser.guess("a.mkv").await;
        assert_eq!(guess.title.as_deref(), Some("A"));
        assert_eq!(guesser.recorded_queries().await, vec!["a.mkv".to_string()]);
    }
}
