//! Matcher error definitions.

use std::fmt::Debug;

use thiserror::Error;

/// Errors that can occur while building or resolving a branch set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The lookup key has no present branch and there is no default.
    #[error("no matching branch for key: {key}")]
    UnmatchedKey { key: String },

    /// An exhaustive branch set is missing keys of its key space.
    #[error("missing branches for keys: {}", .keys.join(", "))]
    MissingBranches { keys: Vec<String> },
}

impl MatchError {
    /// Build an `UnmatchedKey` error naming `key` by its `Debug` rendering.
    pub fn unmatched<Q: Debug + ?Sized>(key: &Q) -> Self {
        Self::UnmatchedKey {
            key: format!("{key:?}"),
        }
    }
}

/// Result type for matcher operations.
pub type MatchResult<T> = Result<T, MatchError>;
