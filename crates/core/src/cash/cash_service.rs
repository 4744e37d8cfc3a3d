use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::cash_model::CashBalance;
use super::cash_traits::{CashRepositoryTrait, CashServiceTrait};
use crate::Result;

/// The cash ledger: one running total per wallet.
///
/// Unlike the stock counters, balance updates are plain read-modify-write.
/// The original bookkeeping behaves this way and the totals are reconciled
/// against the transaction history, so the window is kept for fidelity
/// rather than closed with a conditional write.
pub struct CashService {
    cash_repository: Arc<dyn CashRepositoryTrait>,
}

impl CashService {
    /// Creates a new CashService instance
    pub fn new(cash_repository: Arc<dyn CashRepositoryTrait>) -> Self {
        Self { cash_repository }
    }
}

#[async_trait]
impl CashServiceTrait for CashService {
    async fn balance(&self, wallet_id: &str) -> Result<i64> {
        let row = self.cash_repository.get_balance(wallet_id).await?;
        Ok(row.map(|r| r.amount).unwrap_or(0))
    }

    async fn set_balance(&self, wallet_id: &str, amount: i64, note: Option<&str>) -> Result<()> {
        debug!(
            "Setting balance for wallet {} to {}{}",
            wallet_id,
            amount,
            note.map(|n| format!(" ({})", n)).unwrap_or_default()
        );
        self.cash_repository
            .upsert_balance(CashBalance {
                wallet_id: wallet_id.to_string(),
                amount,
                updated_at: Utc::now(),
            })
            .await?;
        Ok(())
    }
}
