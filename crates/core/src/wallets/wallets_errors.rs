use thiserror::Error;

/// Custom error type for wallet-related operations
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Wallet not found: {0}")]
    NotFound(String),
    #[error("Invalid wallet data: {0}")]
    InvalidData(String),
}

impl From<WalletError> for String {
    fn from(error: WalletError) -> Self {
        error.to_string()
    }
}
