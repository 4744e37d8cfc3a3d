use async_trait::async_trait;
use std::sync::Arc;

use super::model::{DescriptionRow, TransactionRow};
use crate::client::{Filter, RestClient};
use crate::collections::{DESCRIPTIONS, TRANSACTIONS};
use tokoku_core::transactions::{
    FinancialTransaction, NewFinancialTransaction, TransactionDescription,
    TransactionRepositoryTrait,
};
use tokoku_core::Result;

/// Repository over the `transactions` and `descriptions` collections.
pub struct TransactionRestRepository {
    client: Arc<RestClient>,
}

impl TransactionRestRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRestRepository {
    async fn insert_transaction(
        &self,
        new_transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction> {
        let stored: TransactionRow = self
            .client
            .insert(TRANSACTIONS, &TransactionRow::from_new(new_transaction))
            .await?;
        stored.try_into()
    }

    async fn find_description_by_name(
        &self,
        name: &str,
    ) -> Result<Option<TransactionDescription>> {
        let row = self
            .client
            .find_one::<DescriptionRow>(DESCRIPTIONS, &[Filter::eq("name", name)])
            .await?;
        Ok(row.map(TransactionDescription::from))
    }
}
