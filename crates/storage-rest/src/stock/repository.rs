use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::model::{LocationStockRow, MovementRow};
use crate::client::{Filter, RestClient};
use crate::collections::{GOODS_HISTORY, LOCATION_STOCKS};
use tokoku_core::stock::{LocationStock, NewStockMovement, StockMovement, StockRepositoryTrait};
use tokoku_core::Result;

/// Repository over the `location_stocks` and `goods_history` collections.
pub struct StockRestRepository {
    client: Arc<RestClient>,
}

impl StockRestRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRestRepository {
    async fn get_location_stock(
        &self,
        item_id: &str,
        location_id: &str,
    ) -> Result<Option<LocationStock>> {
        let row = self
            .client
            .find_one::<LocationStockRow>(
                LOCATION_STOCKS,
                &[
                    Filter::eq("idgood", item_id),
                    Filter::eq("idlocation", location_id),
                ],
            )
            .await?;
        Ok(row.map(LocationStock::from))
    }

    async fn insert_location_stock(&self, location_stock: LocationStock) -> Result<LocationStock> {
        let stored: LocationStockRow = self
            .client
            .insert(LOCATION_STOCKS, &LocationStockRow::from(location_stock))
            .await?;
        Ok(stored.into())
    }

    async fn compare_and_swap_stock(
        &self,
        item_id: &str,
        location_id: &str,
        expected: i64,
        new: i64,
    ) -> Result<bool> {
        // Filtering on the previously observed quantity makes the update
        // conditional: another writer's interleaved change leaves the
        // filter unmatched and the counter untouched.
        let patch = HashMap::from([("stock", new)]);
        let matched = self
            .client
            .update(
                LOCATION_STOCKS,
                &[
                    Filter::eq("idgood", item_id),
                    Filter::eq("idlocation", location_id),
                    Filter::eq("stock", expected),
                ],
                &patch,
            )
            .await?;
        Ok(matched > 0)
    }

    async fn insert_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement> {
        let stored: MovementRow = self
            .client
            .insert(GOODS_HISTORY, &MovementRow::from_new(new_movement))
            .await?;
        stored.try_into()
    }
}
