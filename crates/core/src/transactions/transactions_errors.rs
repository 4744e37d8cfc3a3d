use thiserror::Error;

/// Custom error type for financial transaction operations
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

impl From<TransactionError> for String {
    fn from(error: TransactionError) -> Self {
        error.to_string()
    }
}
