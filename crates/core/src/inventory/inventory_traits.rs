use async_trait::async_trait;

use super::inventory_model::{Item, Location};
use crate::Result;

/// Trait defining the read-side contract for inventory lookups.
///
/// The coordinators use this to verify that a referenced item or location
/// actually exists before writing movement rows against it.
#[async_trait]
pub trait InventoryRepositoryTrait: Send + Sync {
    async fn get_item(&self, item_id: &str) -> Result<Option<Item>>;
    async fn get_location(&self, location_id: &str) -> Result<Option<Location>>;
}
