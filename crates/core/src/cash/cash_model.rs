use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One signed running total per wallet.
///
/// Invariant (by convention, not enforced by the store): the amount equals
/// the sum of all financial transactions against the wallet, `in` adding and
/// `out` subtracting, plus any direct change-wallet debits made by the sale
/// coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    pub wallet_id: String,
    pub amount: i64,
    pub updated_at: DateTime<Utc>,
}
