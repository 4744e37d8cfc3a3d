//! Names of the remote store's collections.

pub const GOODS: &str = "goods";
pub const LOCATIONS: &str = "locations";
pub const GOODS_HISTORY: &str = "goods_history";
pub const TRANSACTIONS: &str = "transactions";
pub const DESCRIPTIONS: &str = "descriptions";
pub const LOCATION_STOCKS: &str = "location_stocks";
pub const CASH_BALANCES: &str = "cash_balances";
pub const FINANCIAL_CATEGORIES: &str = "financial_categories";
