use serde::{Deserialize, Serialize};

use tokoku_core::inventory::{Item, Location};

/// Wire model for the `goods` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub id_category: Option<String>,
    pub price: i64,
    pub stock: i64,
    pub damaged_stock: i64,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            code: row.code,
            name: row.name,
            category_id: row.id_category,
            price: row.price,
            stock: row.stock,
            damaged_stock: row.damaged_stock,
        }
    }
}

/// Wire model for the `locations` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRow {
    pub id: String,
    pub name: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            name: row.name,
        }
    }
}
