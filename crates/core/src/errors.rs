//! Core error types for the shop application.
//!
//! This module defines store-agnostic error types. Storage-specific errors
//! (from reqwest, serde_json, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::batches::BatchError;
use crate::sales::SaleError;
use crate::stock::StockError;
use crate::transactions::TransactionError;
use crate::wallets::WalletError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Coordinators return this for every expected failure; the UI layer renders
/// the `Display` message and must not assume the underlying data is still
/// consistent (partial writes may have been committed before the failure).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Stock error: {0}")]
    Stock(#[from] StockError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Sale error: {0}")]
    Sale(#[from] SaleError),

    #[error("Stock batch error: {0}")]
    Batch(#[from] BatchError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic transport/persistence errors.
///
/// The remote data store is a plain collection-over-REST service; these
/// variants cover the failure modes the services care about without leaking
/// HTTP types into the domain layer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A conditional update matched zero rows, meaning another writer got
    /// there first. No retry is performed; the caller surfaces the failure.
    #[error("Conflicting concurrent update: {0}")]
    Conflict(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Store(StoreError::MalformedResponse(err.to_string()))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}
