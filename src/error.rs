//! Error types for the trie dictionary.

use thiserror::Error;

/// Error variants for dictionary construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Construction input was malformed, or a node number was out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A queried key is not stored with at least one value.
    #[error("key not found: {0}")]
    KeyAbsent(String),
}

/// A specialized Result type for dictionary operations.
pub type Result<T> = std::result::Result<T, Error>;
