use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::stock_model::{LocationStock, NewStockMovement, StockMovement};
use super::stock_traits::{StockRepositoryTrait, StockServiceTrait};
use super::StockError;
use crate::Result;

/// The stock ledger: movement history plus the per-location counters.
///
/// Counter updates go through an optimistic compare-and-swap so that two
/// concurrent writers cannot both apply a delta on top of the same stale
/// read; the loser gets [`StockError::Conflict`] and nothing is written.
pub struct StockService {
    stock_repository: Arc<dyn StockRepositoryTrait>,
}

impl StockService {
    /// Creates a new StockService instance
    pub fn new(stock_repository: Arc<dyn StockRepositoryTrait>) -> Self {
        Self { stock_repository }
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    async fn current_stock(&self, item_id: &str, location_id: &str) -> Result<i64> {
        let row = self
            .stock_repository
            .get_location_stock(item_id, location_id)
            .await?;
        Ok(row.map(|r| r.stock).unwrap_or(0))
    }

    async fn record_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement> {
        new_movement.validate()?;
        self.stock_repository.insert_movement(new_movement).await
    }

    async fn apply_delta(&self, item_id: &str, location_id: &str, delta: i64) -> Result<i64> {
        match self
            .stock_repository
            .get_location_stock(item_id, location_id)
            .await?
        {
            Some(row) => {
                // Callers validate sufficiency beforehand; the clamp is the
                // last line of defense for the non-negativity invariant.
                let new_qty = (row.stock + delta).max(0);
                let swapped = self
                    .stock_repository
                    .compare_and_swap_stock(item_id, location_id, row.stock, new_qty)
                    .await?;
                if !swapped {
                    return Err(StockError::Conflict(format!(
                        "stock for item {} at location {} moved away from {}",
                        item_id, location_id, row.stock
                    ))
                    .into());
                }
                debug!(
                    "Stock for item {} at location {}: {} -> {}",
                    item_id, location_id, row.stock, new_qty
                );
                Ok(new_qty)
            }
            None => {
                let new_qty = delta.max(0);
                self.stock_repository
                    .insert_location_stock(LocationStock {
                        item_id: item_id.to_string(),
                        location_id: location_id.to_string(),
                        stock: new_qty,
                    })
                    .await?;
                Ok(new_qty)
            }
        }
    }
}
