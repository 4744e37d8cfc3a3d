//! Storage-specific error types for the REST store.
//!
//! This module provides error types that wrap reqwest/serde errors and
//! convert them to the store-agnostic error types defined in `tokoku_core`.

use thiserror::Error;
use tokoku_core::errors::{Error, StoreError};

/// Storage-specific errors that wrap HTTP and decoding failures.
///
/// These errors are internal to the storage layer and are converted to
/// `tokoku_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Store returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Http(e) => Error::Store(StoreError::RequestFailed(e.to_string())),
            StorageError::Decode(e) => {
                Error::Store(StoreError::MalformedResponse(e.to_string()))
            }
            StorageError::UnexpectedStatus { status: 404, body } => {
                Error::Store(StoreError::NotFound(body))
            }
            StorageError::UnexpectedStatus { status, body } => Error::Store(
                StoreError::RequestFailed(format!("status {}: {}", status, body)),
            ),
            StorageError::InvalidRequest(msg) => {
                Error::Store(StoreError::RequestFailed(msg))
            }
        }
    }
}
