use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stock::StockError;

/// The authoritative on-hand counter for one (item, location) pair.
///
/// Invariant: `stock >= 0` at all times. The item's own aggregate stock
/// field is a cache and may drift; this row is ground truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStock {
    pub item_id: String,
    pub location_id: String,
    pub stock: i64,
}

/// Signed intent of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    In,
    Out,
    Adjustment,
    Initial,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::In => "in",
            MovementType::Out => "out",
            MovementType::Adjustment => "adjustment",
            MovementType::Initial => "initial",
        }
    }
}

impl std::str::FromStr for MovementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(MovementType::In),
            "out" => Ok(MovementType::Out),
            "adjustment" => Ok(MovementType::Adjustment),
            "initial" => Ok(MovementType::Initial),
            other => Err(format!("Unknown movement type '{}'", other)),
        }
    }
}

/// An immutable stock-movement history row.
///
/// Written once per line item per coordinator run; never updated or deleted
/// by the coordinators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub item_id: String,
    pub location_id: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub price: i64,
    /// Wallet the movement settled against, when money changed hands.
    pub wallet_id: Option<String>,
    /// Back-reference to the financial transaction created by the same
    /// coordinator call.
    pub transaction_id: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for appending a stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockMovement {
    pub item_id: String,
    pub location_id: String,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub price: i64,
    pub wallet_id: Option<String>,
    pub transaction_id: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
}

impl NewStockMovement {
    pub fn validate(&self) -> Result<(), StockError> {
        if self.item_id.trim().is_empty() {
            return Err(StockError::InvalidData(
                "Item ID cannot be empty".to_string(),
            ));
        }
        if self.location_id.trim().is_empty() {
            return Err(StockError::InvalidData(
                "Location ID cannot be empty".to_string(),
            ));
        }
        if self.quantity < 0 {
            return Err(StockError::InvalidData(
                "Movement quantity cannot be negative".to_string(),
            ));
        }
        if self.price < 0 {
            return Err(StockError::InvalidData(
                "Movement price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
