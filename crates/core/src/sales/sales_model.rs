use serde::{Deserialize, Serialize};

use crate::sales::SaleError;

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Digital,
}

/// One checkout line: quantity of an item sold from a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub item_id: String,
    pub location_id: String,
    pub quantity: i64,
    pub price: i64,
}

/// Input model for one checkout.
///
/// Callers filter out zero-quantity lines before building this; the
/// coordinator rejects a sale with no qualifying lines outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub lines: Vec<SaleLine>,
    pub payment_method: PaymentMethod,
    /// Cash handed over by the customer; ignored for digital payments.
    pub cash_received: i64,
    /// Display name of the acting admin, tagged onto every movement row.
    pub admin: String,
    pub note: Option<String>,
}

impl NewSale {
    pub fn validate(&self) -> Result<(), SaleError> {
        if self.lines.is_empty() {
            return Err(SaleError::EmptySale);
        }
        for line in &self.lines {
            if line.quantity <= 0 {
                return Err(SaleError::InvalidData(format!(
                    "Line for item {} has non-positive quantity",
                    line.item_id
                )));
            }
            if line.price < 0 {
                return Err(SaleError::InvalidData(format!(
                    "Line for item {} has negative price",
                    line.item_id
                )));
            }
        }
        Ok(())
    }

    pub fn total(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity * l.price).sum()
    }

    /// Change owed to the customer: zero for digital payments, otherwise
    /// whatever was handed over beyond the total, clamped at zero.
    pub fn change(&self) -> i64 {
        match self.payment_method {
            PaymentMethod::Digital => 0,
            PaymentMethod::Cash => (self.cash_received - self.total()).max(0),
        }
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    pub transaction_id: String,
    pub total: i64,
    pub change: i64,
}
