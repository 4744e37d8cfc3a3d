//! Tokoku Core - Domain entities, services, and traits.
//!
//! This crate contains the bookkeeping logic for the shop: wallet
//! resolution, the stock and cash ledgers, the financial transaction
//! recorder, and the two coordinators (sale checkout and bulk stock
//! batches) that tie them together. It is store-agnostic and defines
//! traits that are implemented by the `storage-rest` crate.

pub mod batches;
pub mod cash;
pub mod constants;
pub mod errors;
pub mod inventory;
pub mod sales;
pub mod stock;
pub mod transactions;
pub mod wallets;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
