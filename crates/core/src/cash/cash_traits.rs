use async_trait::async_trait;

use super::cash_model::CashBalance;
use crate::Result;

/// Trait defining the contract for cash balance repository operations.
#[async_trait]
pub trait CashRepositoryTrait: Send + Sync {
    async fn get_balance(&self, wallet_id: &str) -> Result<Option<CashBalance>>;
    async fn upsert_balance(&self, balance: CashBalance) -> Result<CashBalance>;
}

/// Trait defining the contract for cash ledger service operations.
///
/// The coordinators read-then-write these balances: read, compute the new
/// amount in memory, write back. This window is not protected; see the
/// service docs for why that is kept as-is.
#[async_trait]
pub trait CashServiceTrait: Send + Sync {
    /// Current balance for the wallet; 0 when no row exists yet.
    async fn balance(&self, wallet_id: &str) -> Result<i64>;
    async fn set_balance(&self, wallet_id: &str, amount: i64, note: Option<&str>) -> Result<()>;
}
