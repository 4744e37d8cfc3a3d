use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::sales_model::{NewSale, PaymentMethod, SaleOutcome};
use super::SaleError;
use crate::cash::CashServiceTrait;
use crate::constants::{DEFAULT_SALE_NOTE, DESCRIPTION_SALE, REVENUE_WALLET_NAME};
use crate::inventory::InventoryRepositoryTrait;
use crate::stock::{MovementType, NewStockMovement, StockError, StockServiceTrait};
use crate::transactions::{
    NewFinancialTransaction, TransactionDirection, TransactionServiceTrait,
};
use crate::wallets::{WalletFlag, WalletServiceTrait};
use crate::Result;

/// Trait defining the contract for the sale checkout coordinator.
#[async_trait]
pub trait SaleServiceTrait: Send + Sync {
    async fn process_sale(&self, sale: NewSale) -> Result<SaleOutcome>;
}

/// Coordinates one checkout across four record families: the financial
/// ledger, movement history, per-location counters, and wallet balances.
///
/// The store offers no cross-collection transaction, so ordering is the
/// only guarantee: the ledger row is written first, and every later write
/// carries its id. A failure partway leaves earlier lines committed; the
/// caller must surface the error and must not assume consistency.
pub struct SaleService {
    wallet_service: Arc<dyn WalletServiceTrait>,
    transaction_service: Arc<dyn TransactionServiceTrait>,
    stock_service: Arc<dyn StockServiceTrait>,
    cash_service: Arc<dyn CashServiceTrait>,
    inventory_repository: Arc<dyn InventoryRepositoryTrait>,
}

impl SaleService {
    /// Creates a new SaleService instance with injected dependencies
    pub fn new(
        wallet_service: Arc<dyn WalletServiceTrait>,
        transaction_service: Arc<dyn TransactionServiceTrait>,
        stock_service: Arc<dyn StockServiceTrait>,
        cash_service: Arc<dyn CashServiceTrait>,
        inventory_repository: Arc<dyn InventoryRepositoryTrait>,
    ) -> Self {
        Self {
            wallet_service,
            transaction_service,
            stock_service,
            cash_service,
            inventory_repository,
        }
    }
}

#[async_trait]
impl SaleServiceTrait for SaleService {
    async fn process_sale(&self, sale: NewSale) -> Result<SaleOutcome> {
        // Precondition gate: nothing below runs for an invalid sale.
        sale.validate()?;

        // Both wallets must resolve before any write, even for digital
        // payments that never touch the change wallet.
        let revenue_wallet = self.wallet_service.resolve_by_name(REVENUE_WALLET_NAME).await?;
        let change_wallet = self.wallet_service.resolve_by_flag(WalletFlag::Change).await?;

        let total = sale.total();
        let change = sale.change();
        debug!(
            "Processing sale: {} lines, total {}, change {}",
            sale.lines.len(),
            total,
            change
        );

        let description_id = self
            .transaction_service
            .resolve_description(DESCRIPTION_SALE)
            .await?;

        // The ledger row comes first so every movement can back-reference
        // it. If this fails, no stock or balance write has happened.
        let transaction = self
            .transaction_service
            .create(NewFinancialTransaction {
                direction: TransactionDirection::In,
                total,
                wallet_id: Some(revenue_wallet.id.clone()),
                description_id,
                note: Some(
                    sale.note
                        .clone()
                        .unwrap_or_else(|| DEFAULT_SALE_NOTE.to_string()),
                ),
            })
            .await?;

        for line in &sale.lines {
            let item = self
                .inventory_repository
                .get_item(&line.item_id)
                .await?
                .ok_or_else(|| SaleError::UnknownItem(line.item_id.clone()))?;
            self.inventory_repository
                .get_location(&line.location_id)
                .await?
                .ok_or_else(|| SaleError::UnknownLocation(line.location_id.clone()))?;

            let on_hand = self
                .stock_service
                .current_stock(&line.item_id, &line.location_id)
                .await?;
            if line.quantity > on_hand {
                warn!(
                    "Aborting sale {}: '{}' has {} on hand, {} requested",
                    transaction.id, item.name, on_hand, line.quantity
                );
                return Err(StockError::Insufficient {
                    item: item.name,
                    requested: line.quantity,
                    on_hand,
                }
                .into());
            }

            self.stock_service
                .record_movement(NewStockMovement {
                    item_id: line.item_id.clone(),
                    location_id: line.location_id.clone(),
                    movement_type: MovementType::Out,
                    quantity: line.quantity,
                    price: line.price,
                    wallet_id: Some(revenue_wallet.id.clone()),
                    transaction_id: Some(transaction.id.clone()),
                    description: Some(DESCRIPTION_SALE.to_string()),
                    note: Some(format!("Penjualan oleh {}", sale.admin)),
                })
                .await?;
            self.stock_service
                .apply_delta(&line.item_id, &line.location_id, -line.quantity)
                .await?;
        }

        let revenue_balance = self.cash_service.balance(&revenue_wallet.id).await?;
        self.cash_service
            .set_balance(
                &revenue_wallet.id,
                revenue_balance + total,
                Some(DESCRIPTION_SALE),
            )
            .await?;

        if sale.payment_method == PaymentMethod::Cash && change > 0 {
            let change_balance = self.cash_service.balance(&change_wallet.id).await?;
            self.cash_service
                .set_balance(
                    &change_wallet.id,
                    (change_balance - change).max(0),
                    Some("Kembalian"),
                )
                .await?;
        }

        Ok(SaleOutcome {
            transaction_id: transaction.id,
            total,
            change,
        })
    }
}
