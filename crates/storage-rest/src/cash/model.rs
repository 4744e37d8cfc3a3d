use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tokoku_core::cash::CashBalance;

/// Wire model for the `cash_balances` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashBalanceRow {
    pub id_category: String,
    pub amount: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<CashBalanceRow> for CashBalance {
    fn from(row: CashBalanceRow) -> Self {
        CashBalance {
            wallet_id: row.id_category,
            amount: row.amount,
            updated_at: row.updated_at,
        }
    }
}

impl From<CashBalance> for CashBalanceRow {
    fn from(balance: CashBalance) -> Self {
        CashBalanceRow {
            id_category: balance.wallet_id,
            amount: balance.amount,
            updated_at: balance.updated_at,
        }
    }
}
