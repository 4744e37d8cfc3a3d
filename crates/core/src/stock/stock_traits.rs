use async_trait::async_trait;

use super::stock_model::{LocationStock, NewStockMovement, StockMovement};
use crate::Result;

/// Trait defining the contract for stock repository operations.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    async fn get_location_stock(
        &self,
        item_id: &str,
        location_id: &str,
    ) -> Result<Option<LocationStock>>;
    async fn insert_location_stock(&self, location_stock: LocationStock) -> Result<LocationStock>;
    /// Sets the counter to `new` only if it still equals `expected`.
    /// Returns whether a row matched, so lost updates between the caller's
    /// read and this write are detected instead of silently overwritten.
    async fn compare_and_swap_stock(
        &self,
        item_id: &str,
        location_id: &str,
        expected: i64,
        new: i64,
    ) -> Result<bool>;
    async fn insert_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement>;
}

/// Trait defining the contract for stock ledger service operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    /// Current on-hand quantity at the given (item, location); 0 when no
    /// counter row exists yet.
    async fn current_stock(&self, item_id: &str, location_id: &str) -> Result<i64>;
    /// Appends an immutable movement history row.
    async fn record_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement>;
    /// Applies a signed delta to the counter, clamped so the stored quantity
    /// never goes below zero. Returns the new quantity.
    async fn apply_delta(&self, item_id: &str, location_id: &str, delta: i64) -> Result<i64>;
}
