use async_trait::async_trait;

use super::wallets_model::{NewWallet, Wallet, WalletFlag, WalletUpdate};
use crate::Result;

/// Trait defining the contract for Wallet repository operations.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    async fn find_by_flag(&self, flag: WalletFlag) -> Result<Option<Wallet>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Wallet>>;
    async fn list(&self) -> Result<Vec<Wallet>>;
    async fn insert(&self, wallet: Wallet) -> Result<Wallet>;
    async fn update(&self, wallet: Wallet) -> Result<Wallet>;
    /// Clears the given flag on every wallet currently carrying it.
    async fn clear_flag(&self, flag: WalletFlag) -> Result<()>;
}

/// Trait defining the contract for Wallet service operations.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Resolves the single wallet carrying `flag`. Missing wallets are an
    /// error: the coordinators use this as their first validation gate and
    /// must abort before any write occurs.
    async fn resolve_by_flag(&self, flag: WalletFlag) -> Result<Wallet>;
    /// Resolves a wallet by its display name (e.g. the "Omset" revenue
    /// wallet). Missing wallets are an error, as with [`Self::resolve_by_flag`].
    async fn resolve_by_name(&self, name: &str) -> Result<Wallet>;
    async fn list_wallets(&self) -> Result<Vec<Wallet>>;
    async fn create_wallet(&self, new_wallet: NewWallet) -> Result<Wallet>;
    async fn update_wallet(&self, update: WalletUpdate) -> Result<Wallet>;
}
