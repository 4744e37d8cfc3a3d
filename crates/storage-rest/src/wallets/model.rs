use serde::{Deserialize, Serialize};

use tokoku_core::wallets::Wallet;

/// Wire model for the `financial_categories` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletRow {
    pub id: String,
    pub name: String,
    pub is_primary: bool,
    pub is_change: bool,
    pub is_active: bool,
}

impl From<WalletRow> for Wallet {
    fn from(row: WalletRow) -> Self {
        Wallet {
            id: row.id,
            name: row.name,
            is_primary: row.is_primary,
            is_change: row.is_change,
            is_active: row.is_active,
        }
    }
}

impl From<Wallet> for WalletRow {
    fn from(wallet: Wallet) -> Self {
        WalletRow {
            id: wallet.id,
            name: wallet.name,
            is_primary: wallet.is_primary,
            is_change: wallet.is_change,
            is_active: wallet.is_active,
        }
    }
}
