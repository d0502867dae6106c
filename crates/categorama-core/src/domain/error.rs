//! Domain errors

use thiserror::Error;

/// Common result type for domain and repository operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport or HTTP-level failure talking to the document store
    #[error("Store error: {0}")]
    Store(String),

    /// The store answered, but the document did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}
