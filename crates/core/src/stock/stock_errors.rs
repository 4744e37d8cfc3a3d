use thiserror::Error;

/// Custom error type for stock-related operations
#[derive(Debug, Error)]
pub enum StockError {
    #[error("Insufficient stock for '{item}': requested {requested}, on hand {on_hand}")]
    Insufficient {
        item: String,
        requested: i64,
        on_hand: i64,
    },
    /// The counter changed between the read and the conditional write.
    /// The caller surfaces this without retrying.
    #[error("Stock counter changed concurrently: {0}")]
    Conflict(String),
    #[error("Invalid stock data: {0}")]
    InvalidData(String),
}

impl From<StockError> for String {
    fn from(error: StockError) -> Self {
        error.to_string()
    }
}
