use async_trait::async_trait;
use std::sync::Arc;

use super::model::{ItemRow, LocationRow};
use crate::client::{Filter, RestClient};
use crate::collections::{GOODS, LOCATIONS};
use tokoku_core::inventory::{InventoryRepositoryTrait, Item, Location};
use tokoku_core::Result;

/// Read-side repository over the `goods` and `locations` collections.
pub struct InventoryRestRepository {
    client: Arc<RestClient>,
}

impl InventoryRestRepository {
    pub fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InventoryRepositoryTrait for InventoryRestRepository {
    async fn get_item(&self, item_id: &str) -> Result<Option<Item>> {
        let row = self
            .client
            .find_one::<ItemRow>(GOODS, &[Filter::eq("id", item_id)])
            .await?;
        Ok(row.map(Item::from))
    }

    async fn get_location(&self, location_id: &str) -> Result<Option<Location>> {
        let row = self
            .client
            .find_one::<LocationRow>(LOCATIONS, &[Filter::eq("id", location_id)])
            .await?;
        Ok(row.map(Location::from))
    }
}
