use thiserror::Error;

/// Custom error type for bulk stock batch operations
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Batch has no line items")]
    EmptyBatch,
    #[error("No wallet was chosen for the batch")]
    MissingWallet,
    #[error("Invalid batch data: {0}")]
    InvalidData(String),
}

impl From<BatchError> for String {
    fn from(error: BatchError) -> Self {
        error.to_string()
    }
}
