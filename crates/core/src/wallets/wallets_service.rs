use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::wallets_model::{NewWallet, Wallet, WalletFlag, WalletUpdate};
use super::wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
use super::WalletError;
use crate::Result;

/// Service for resolving and managing cash wallets.
pub struct WalletService {
    wallet_repository: Arc<dyn WalletRepositoryTrait>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(wallet_repository: Arc<dyn WalletRepositoryTrait>) -> Self {
        Self { wallet_repository }
    }

    /// Clears `is_primary`/`is_change` elsewhere as needed so that at most
    /// one wallet carries each flag after the caller's write.
    async fn enforce_flag_exclusivity(&self, is_primary: bool, is_change: bool) -> Result<()> {
        if is_primary {
            self.wallet_repository.clear_flag(WalletFlag::Primary).await?;
        }
        if is_change {
            self.wallet_repository.clear_flag(WalletFlag::Change).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl WalletServiceTrait for WalletService {
    async fn resolve_by_flag(&self, flag: WalletFlag) -> Result<Wallet> {
        self.wallet_repository
            .find_by_flag(flag)
            .await?
            .ok_or_else(|| {
                WalletError::NotFound(format!("No wallet carries the {} flag", flag.as_str()))
                    .into()
            })
    }

    async fn resolve_by_name(&self, name: &str) -> Result<Wallet> {
        self.wallet_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| WalletError::NotFound(format!("No wallet named '{}'", name)).into())
    }

    async fn list_wallets(&self) -> Result<Vec<Wallet>> {
        self.wallet_repository.list().await
    }

    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet> {
        new_wallet.validate()?;
        debug!("Creating wallet '{}'", new_wallet.name);

        self.enforce_flag_exclusivity(new_wallet.is_primary, new_wallet.is_change)
            .await?;

        let wallet = Wallet {
            id: Uuid::new_v4().to_string(),
            name: new_wallet.name,
            is_primary: new_wallet.is_primary,
            is_change: new_wallet.is_change,
            is_active: true,
        };
        self.wallet_repository.insert(wallet).await
    }

    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet> {
        update.validate()?;
        debug!("Updating wallet {}", update.id);

        self.enforce_flag_exclusivity(update.is_primary, update.is_change)
            .await?;

        let wallet = Wallet {
            id: update.id,
            name: update.name,
            is_primary: update.is_primary,
            is_change: update.is_change,
            is_active: update.is_active,
        };
        self.wallet_repository.update(wallet).await
    }
}
