use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::transactions_model::{FinancialTransaction, NewFinancialTransaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::Result;

/// Service for appending rows to the financial ledger.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self {
            transaction_repository,
        }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create(
        &self,
        new_transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction> {
        new_transaction.validate()?;
        debug!(
            "Recording {} transaction of {} against wallet {:?}",
            new_transaction.direction.as_str(),
            new_transaction.total,
            new_transaction.wallet_id
        );
        self.transaction_repository
            .insert_transaction(new_transaction)
            .await
    }

    async fn resolve_description(&self, name: &str) -> Result<Option<String>> {
        let description = self
            .transaction_repository
            .find_description_by_name(name)
            .await?;
        if description.is_none() {
            warn!("No transaction description named '{}'", name);
        }
        Ok(description.map(|d| d.id))
    }
}
