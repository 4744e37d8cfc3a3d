use serde::{Deserialize, Serialize};

/// A good sold by the shop.
///
/// `stock` is a denormalized convenience total and may drift from the
/// authoritative per-location counters; callers must treat
/// [`crate::stock::LocationStock`] as ground truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category_id: Option<String>,
    pub price: i64,
    pub stock: i64,
    pub damaged_stock: i64,
}

/// A physical shop location holding stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
}
