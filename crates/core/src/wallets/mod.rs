//! Wallets module - cash wallet models, resolver service, and traits.

mod wallets_errors;
mod wallets_model;
mod wallets_service;
mod wallets_traits;

#[cfg(test)]
mod wallets_service_tests;

pub use wallets_errors::WalletError;
pub use wallets_model::{NewWallet, Wallet, WalletFlag, WalletUpdate};
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletRepositoryTrait, WalletServiceTrait};
