use async_trait::async_trait;
use std::sync::Arc;

use super::model::CashBalanceRow;
use crate::client::{Filter, RestClient};
use crate::collections::CASH_BALANCES;
use tokoku_core::cash::{CashBalance, CashRepositoryTrait};
use tokoku_core::Result;

/// Repository over the `cash_balances` collection.
pub struct CashRestRepository {
    client: Arc<RestClient>,
}

impl CashRestRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CashRepositoryTrait for CashRestRepository {
    async fn get_balance(&self, wallet_id: &str) -> Result<Option<CashBalance>> {
        let row = self
            .client
            .find_one::<CashBalanceRow>(CASH_BALANCES, &[Filter::eq("id_category", wallet_id)])
            .await?;
        Ok(row.map(CashBalance::from))
    }

    async fn upsert_balance(&self, balance: CashBalance) -> Result<CashBalance> {
        let row = CashBalanceRow::from(balance.clone());
        let matched = self
            .client
            .update(
                CASH_BALANCES,
                &[Filter::eq("id_category", &row.id_category)],
                &row,
            )
            .await?;
        if matched == 0 {
            let stored: CashBalanceRow = self.client.insert(CASH_BALANCES, &row).await?;
            return Ok(stored.into());
        }
        Ok(balance)
    }
}
