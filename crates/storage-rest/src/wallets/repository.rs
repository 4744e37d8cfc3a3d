use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::model::WalletRow;
use crate::client::{Filter, RestClient};
use crate::collections::FINANCIAL_CATEGORIES;
use tokoku_core::errors::StoreError;
use tokoku_core::wallets::{Wallet, WalletFlag, WalletRepositoryTrait};
use tokoku_core::Result;

/// Repository for wallets stored in the `financial_categories` collection.
pub struct WalletRestRepository {
    client: Arc<RestClient>,
}

impl WalletRestRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WalletRepositoryTrait for WalletRestRepository {
    async fn find_by_flag(&self, flag: WalletFlag) -> Result<Option<Wallet>> {
        let row = self
            .client
            .find_one::<WalletRow>(FINANCIAL_CATEGORIES, &[Filter::eq(flag.as_str(), true)])
            .await?;
        Ok(row.map(Wallet::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Wallet>> {
        let row = self
            .client
            .find_one::<WalletRow>(FINANCIAL_CATEGORIES, &[Filter::eq("name", name)])
            .await?;
        Ok(row.map(Wallet::from))
    }

    async fn list(&self) -> Result<Vec<Wallet>> {
        let rows = self
            .client
            .list::<WalletRow>(FINANCIAL_CATEGORIES, &[])
            .await?;
        Ok(rows.into_iter().map(Wallet::from).collect())
    }

    async fn insert(&self, wallet: Wallet) -> Result<Wallet> {
        let stored: WalletRow = self
            .client
            .insert(FINANCIAL_CATEGORIES, &WalletRow::from(wallet))
            .await?;
        Ok(stored.into())
    }

    async fn update(&self, wallet: Wallet) -> Result<Wallet> {
        let row = WalletRow::from(wallet);
        let matched = self
            .client
            .update(FINANCIAL_CATEGORIES, &[Filter::eq("id", &row.id)], &row)
            .await?;
        if matched == 0 {
            return Err(StoreError::NotFound(format!("wallet {}", row.id)).into());
        }
        Ok(row.into())
    }

    async fn clear_flag(&self, flag: WalletFlag) -> Result<()> {
        let patch = HashMap::from([(flag.as_str(), false)]);
        self.client
            .update(
                FINANCIAL_CATEGORIES,
                &[Filter::eq(flag.as_str(), true)],
                &patch,
            )
            .await?;
        Ok(())
    }
}
