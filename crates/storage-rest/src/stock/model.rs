use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokoku_core::errors::{Error, StoreError};
use tokoku_core::stock::{LocationStock, NewStockMovement, StockMovement};

/// Wire model for the `location_stocks` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationStockRow {
    pub idgood: String,
    pub idlocation: String,
    pub stock: i64,
}

impl From<LocationStockRow> for LocationStock {
    fn from(row: LocationStockRow) -> Self {
        LocationStock {
            item_id: row.idgood,
            location_id: row.idlocation,
            stock: row.stock,
        }
    }
}

impl From<LocationStock> for LocationStockRow {
    fn from(ls: LocationStock) -> Self {
        LocationStockRow {
            idgood: ls.item_id,
            idlocation: ls.location_id,
            stock: ls.stock,
        }
    }
}

/// Wire model for the `goods_history` collection.
///
/// `stock` holds the moved quantity and `payment_type` the wallet
/// reference; both names are inherited from the store schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRow {
    pub id: String,
    pub idgood: String,
    pub idlocation: String,
    pub stock: i64,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub payment_type: Option<String>,
    pub transaction_id: Option<String>,
    pub price: i64,
    pub description: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MovementRow {
    pub fn from_new(new_movement: NewStockMovement) -> Self {
        MovementRow {
            id: Uuid::new_v4().to_string(),
            idgood: new_movement.item_id,
            idlocation: new_movement.location_id,
            stock: new_movement.quantity,
            movement_type: new_movement.movement_type.as_str().to_string(),
            payment_type: new_movement.wallet_id,
            transaction_id: new_movement.transaction_id,
            price: new_movement.price,
            description: new_movement.description,
            note: new_movement.note,
            created_at: Utc::now(),
        }
    }
}

impl TryFrom<MovementRow> for StockMovement {
    type Error = Error;

    fn try_from(row: MovementRow) -> Result<Self, Self::Error> {
        let movement_type = row
            .movement_type
            .parse()
            .map_err(StoreError::MalformedResponse)?;
        Ok(StockMovement {
            id: row.id,
            item_id: row.idgood,
            location_id: row.idlocation,
            movement_type,
            quantity: row.stock,
            price: row.price,
            wallet_id: row.payment_type,
            transaction_id: row.transaction_id,
            description: row.description,
            note: row.note,
            created_at: row.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokoku_core::stock::MovementType;

    #[test]
    fn test_movement_row_round_trip() {
        let row = MovementRow::from_new(NewStockMovement {
            item_id: "g1".to_string(),
            location_id: "l1".to_string(),
            movement_type: MovementType::Out,
            quantity: 3,
            price: 1500,
            wallet_id: Some("w1".to_string()),
            transaction_id: Some("tx1".to_string()),
            description: Some("Penjualan".to_string()),
            note: None,
        });
        assert_eq!(row.movement_type, "out");

        let movement = StockMovement::try_from(row).unwrap();
        assert_eq!(movement.movement_type, MovementType::Out);
        assert_eq!(movement.quantity, 3);
        assert_eq!(movement.wallet_id.as_deref(), Some("w1"));
    }

    #[test]
    fn test_unknown_movement_type_is_rejected() {
        let mut row = MovementRow::from_new(NewStockMovement {
            item_id: "g1".to_string(),
            location_id: "l1".to_string(),
            movement_type: MovementType::In,
            quantity: 1,
            price: 0,
            wallet_id: None,
            transaction_id: None,
            description: None,
            note: None,
        });
        row.movement_type = "sideways".to_string();
        assert!(StockMovement::try_from(row).is_err());
    }
}
