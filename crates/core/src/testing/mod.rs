//! Testing utilities and mock implementations.
//!
//! Provides a mock of the guessing capability so naming-policy and
//! orchestration tests are decoupled from the real filename heuristics.

mod mock_guesser;

pub use mock_guesser::MockGuesser;
