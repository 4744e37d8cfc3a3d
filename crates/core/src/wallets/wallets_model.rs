use serde::{Deserialize, Serialize};

use crate::wallets::WalletError;

/// A cash wallet ("financial category" in the store schema).
///
/// At most one wallet carries `is_primary` and at most one carries
/// `is_change` at any time; the write path of [`super::WalletService`]
/// enforces this by clearing the flag elsewhere before setting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub is_primary: bool,
    pub is_change: bool,
    pub is_active: bool,
}

/// The two exclusive wallet flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletFlag {
    /// The shop's primary wallet, used by default for stock-in flows.
    Primary,
    /// The drawer change is paid out of.
    Change,
}

impl WalletFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletFlag::Primary => "is_primary",
            WalletFlag::Change => "is_change",
        }
    }
}

/// Input model for creating a new wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    pub is_primary: bool,
    pub is_change: bool,
}

impl NewWallet {
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.name.trim().is_empty() {
            return Err(WalletError::InvalidData(
                "Wallet name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUpdate {
    pub id: String,
    pub name: String,
    pub is_primary: bool,
    pub is_change: bool,
    pub is_active: bool,
}

impl WalletUpdate {
    pub fn validate(&self) -> Result<(), WalletError> {
        if self.id.trim().is_empty() {
            return Err(WalletError::InvalidData(
                "Wallet ID cannot be empty".to_string(),
            ));
        }
        if self.name.trim().is_empty() {
            return Err(WalletError::InvalidData(
                "Wallet name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
