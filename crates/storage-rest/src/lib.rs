//! REST storage implementation for Tokoku.
//!
//! The remote data store is a plain relational service exposed as named
//! collections with filter/insert/update/delete operations; there are no
//! stored procedures and no multi-statement transactions. This crate
//! implements the repository traits from `tokoku-core` on top of that
//! surface. Wire models carry the store's exact field names and convert
//! to and from the core domain models.

pub mod cash;
pub mod client;
pub mod collections;
pub mod errors;
pub mod inventory;
pub mod stock;
pub mod transactions;
pub mod wallets;

pub use client::{Filter, RestClient, RestClientConfig};
pub use errors::StorageError;
