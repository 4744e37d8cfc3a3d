use async_trait::async_trait;

use super::transactions_model::{
    FinancialTransaction, NewFinancialTransaction, TransactionDescription,
};
use crate::Result;

/// Trait defining the contract for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    async fn insert_transaction(
        &self,
        new_transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction>;
    async fn find_description_by_name(
        &self,
        name: &str,
    ) -> Result<Option<TransactionDescription>>;
}

/// Trait defining the contract for the financial transaction recorder.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates and appends one ledger row.
    async fn create(
        &self,
        new_transaction: NewFinancialTransaction,
    ) -> Result<FinancialTransaction>;
    /// Resolves a description tag by display name so callers can tag
    /// transactions without knowing identifiers. A missing tag is not an
    /// error; the transaction is simply written untagged.
    async fn resolve_description(&self, name: &str) -> Result<Option<String>>;
}
