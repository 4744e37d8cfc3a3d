use serde::{Deserialize, Serialize};

use crate::batches::BatchError;
use crate::stock::MovementType;
use crate::transactions::TransactionDirection;

/// Which way the stock moves in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchDirection {
    In,
    Out,
}

impl BatchDirection {
    pub fn movement_type(&self) -> MovementType {
        match self {
            BatchDirection::In => MovementType::In,
            BatchDirection::Out => MovementType::Out,
        }
    }

    /// The financial direction is the inverse of the stock direction:
    /// stocking in spends money, stocking out earns it. Easy to get
    /// backwards; pinned by a regression test.
    pub fn financial_direction(&self) -> TransactionDirection {
        match self {
            BatchDirection::In => TransactionDirection::In,
            BatchDirection::Out => TransactionDirection::Out,
        }
        .inverse()
    }
}

/// One line of a bulk stock batch.
///
/// `item_name` is carried by the caller (the selection screen has it in
/// hand) so the batch summary can be built before any lookup runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchLine {
    pub item_id: String,
    pub item_name: String,
    pub location_id: String,
    pub quantity: i64,
    pub price: i64,
}

/// Input model for a bulk stock batch under one wallet and one direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockBatch {
    pub direction: BatchDirection,
    pub lines: Vec<BatchLine>,
    pub wallet_id: String,
    pub admin: String,
    pub note: Option<String>,
}

impl NewStockBatch {
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.lines.is_empty() {
            return Err(BatchError::EmptyBatch);
        }
        if self.wallet_id.trim().is_empty() {
            return Err(BatchError::MissingWallet);
        }
        for line in &self.lines {
            if line.quantity <= 0 {
                return Err(BatchError::InvalidData(format!(
                    "Line for item {} has non-positive quantity",
                    line.item_id
                )));
            }
            if line.price < 0 {
                return Err(BatchError::InvalidData(format!(
                    "Line for item {} has negative price",
                    line.item_id
                )));
            }
        }
        Ok(())
    }

    /// Batch total over every submitted line. Lines later skipped by the
    /// referential checks still count; the total is fixed before the
    /// per-line loop runs, matching the ledger row written up front.
    pub fn total(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity * l.price).sum()
    }

    /// Human-readable summary: `"qty × name"` per line, comma separated.
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{} × {}", l.quantity, l.item_name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a processed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub transaction_id: String,
    pub total: i64,
    /// Names of lines skipped because their item or location no longer
    /// exists. Empty on a fully clean run.
    pub skipped_items: Vec<String>,
}
