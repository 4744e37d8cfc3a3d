use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionError;

/// Direction of a financial transaction: money arriving or leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    In,
    Out,
}

impl TransactionDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionDirection::In => "in",
            TransactionDirection::Out => "out",
        }
    }

    /// The opposite direction. Bulk stock batches record their financial
    /// transaction against the inverse of the stock direction: stocking in
    /// spends money, stocking out earns it.
    pub fn inverse(&self) -> TransactionDirection {
        match self {
            TransactionDirection::In => TransactionDirection::Out,
            TransactionDirection::Out => TransactionDirection::In,
        }
    }
}

impl std::str::FromStr for TransactionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(TransactionDirection::In),
            "out" => Ok(TransactionDirection::Out),
            other => Err(format!("Unknown transaction direction '{}'", other)),
        }
    }
}

/// A row in the financial ledger.
///
/// One row is written per coordinator call, before any stock or balance
/// write, so every movement produced by the call can back-reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTransaction {
    pub id: String,
    pub direction: TransactionDirection,
    pub total: i64,
    pub wallet_id: Option<String>,
    pub description_id: Option<String>,
    /// Legacy single-item linkage kept for wire compatibility; the
    /// coordinators leave it empty and link movements the other way around.
    pub movement_id: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A named description tag ("Penjualan", "Pembelian") transactions can carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescription {
    pub id: String,
    pub name: String,
}

/// Input model for recording a financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialTransaction {
    pub direction: TransactionDirection,
    pub total: i64,
    pub wallet_id: Option<String>,
    pub description_id: Option<String>,
    pub note: Option<String>,
}

impl NewFinancialTransaction {
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.total < 0 {
            return Err(TransactionError::Rejected(
                "Transaction total cannot be negative".to_string(),
            ));
        }
        if let Some(wallet_id) = &self.wallet_id {
            if wallet_id.trim().is_empty() {
                return Err(TransactionError::Rejected(
                    "Wallet reference cannot be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}
