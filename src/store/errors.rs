//! Error types for the store module.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Any store failure is fatal for the request that triggered it; the API
/// layer maps these to an internal-error response.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A lock guarding the store was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}
