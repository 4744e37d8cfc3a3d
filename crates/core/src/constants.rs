//! Well-known names and tags used across the bookkeeping services.
//!
//! The shop's data predates this codebase, so the revenue wallet and the
//! transaction description tags are looked up by their Indonesian display
//! names rather than by identifier.

/// Display name of the revenue wallet every sale is credited to.
pub const REVENUE_WALLET_NAME: &str = "Omset";

/// Description tag attached to sale transactions.
pub const DESCRIPTION_SALE: &str = "Penjualan";

/// Description tag attached to purchase (stock-in) transactions.
pub const DESCRIPTION_PURCHASE: &str = "Pembelian";

/// Default note for sale transactions when the caller supplies none.
pub const DEFAULT_SALE_NOTE: &str = "Penjualan kasir";
