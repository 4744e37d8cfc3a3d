use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tokoku_core::errors::{Error, StoreError};
use tokoku_core::transactions::{
    FinancialTransaction, NewFinancialTransaction, TransactionDescription,
};

/// Wire model for the `transactions` collection.
///
/// `payment_type` holds the wallet reference and `id_goods_history` the
/// legacy single-movement linkage; both names come from the store schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    #[serde(rename = "type")]
    pub direction: String,
    pub total: i64,
    pub payment_type: Option<String>,
    pub id_description: Option<String>,
    pub id_goods_history: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TransactionRow {
    pub fn from_new(new_transaction: NewFinancialTransaction) -> Self {
        TransactionRow {
            id: Uuid::new_v4().to_string(),
            direction: new_transaction.direction.as_str().to_string(),
            total: new_transaction.total,
            payment_type: new_transaction.wallet_id,
            id_description: new_transaction.description_id,
            id_goods_history: None,
            note: new_transaction.note,
            created_at: Utc::now(),
        }
    }
}

impl TryFrom<TransactionRow> for FinancialTransaction {
    type Error = Error;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let direction = row
            .direction
            .parse()
            .map_err(StoreError::MalformedResponse)?;
        Ok(FinancialTransaction {
            id: row.id,
            direction,
            total: row.total,
            wallet_id: row.payment_type,
            description_id: row.id_description,
            movement_id: row.id_goods_history,
            note: row.note,
            created_at: row.created_at,
        })
    }
}

/// Wire model for the `descriptions` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRow {
    pub id: String,
    pub name: String,
}

impl From<DescriptionRow> for TransactionDescription {
    fn from(row: DescriptionRow) -> Self {
        TransactionDescription {
            id: row.id,
            name: row.name,
        }
    }
}
