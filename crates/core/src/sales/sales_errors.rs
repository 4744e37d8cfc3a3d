use thiserror::Error;

/// Custom error type for sale checkout operations
#[derive(Debug, Error)]
pub enum SaleError {
    #[error("Sale has no line items")]
    EmptySale,
    #[error("Invalid sale data: {0}")]
    InvalidData(String),
    #[error("Unknown item: {0}")]
    UnknownItem(String),
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

impl From<SaleError> for String {
    fn from(error: SaleError) -> Self {
        error.to_string()
    }
}
