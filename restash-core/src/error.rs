//! Error types and result types for store and service operations.
//!
//! This module provides the error handling shared by every store backend.
//! Use [`StoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a data store.
///
/// This enum covers serialization errors, field lookup failures, transport
/// problems, and backend-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting an entity to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Error during store construction or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// A field name was given that the entity's serialized form does not contain.
    /// The first argument is the field name, the second is the entity's table name.
    #[error("Unknown field {0} on entity {1}")]
    UnknownField(String, String),
    /// The requested entity was not found.
    /// The first argument is the entity id, the second is the table name.
    #[error("Entity {0} not found in {1}")]
    NotFound(i64, String),
    /// A transport-level failure while talking to a remote store (connection,
    /// timeout, malformed response body).
    #[error("Transport error: {0}")]
    Transport(String),
    /// A remote store answered with a non-success HTTP status.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// The HTTP status code received.
        status: u16,
        /// The request URL that produced it.
        url: String,
    },
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` type for store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
