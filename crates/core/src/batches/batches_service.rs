use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::batches_model::{BatchDirection, BatchOutcome, NewStockBatch};
use crate::cash::CashServiceTrait;
use crate::constants::{DESCRIPTION_PURCHASE, DESCRIPTION_SALE};
use crate::inventory::InventoryRepositoryTrait;
use crate::stock::{NewStockMovement, StockError, StockServiceTrait};
use crate::transactions::{NewFinancialTransaction, TransactionServiceTrait};
use crate::Result;

/// Trait defining the contract for the bulk stock batch coordinator.
#[async_trait]
pub trait BatchServiceTrait: Send + Sync {
    async fn process_batch(&self, batch: NewStockBatch) -> Result<BatchOutcome>;
}

/// Coordinates a stock-in or stock-out batch under one wallet and one
/// financial transaction.
///
/// Per-line handling differs from checkout: a line whose item or location
/// is gone is skipped and the batch continues, but a stock-out line with
/// insufficient on-hand aborts the whole batch. Lines written before the
/// abort stay committed and the wallet balance is left untouched; the
/// ledger row from the start of the call already exists at that point.
pub struct BatchService {
    transaction_service: Arc<dyn TransactionServiceTrait>,
    stock_service: Arc<dyn StockServiceTrait>,
    cash_service: Arc<dyn CashServiceTrait>,
    inventory_repository: Arc<dyn InventoryRepositoryTrait>,
}

impl BatchService {
    /// Creates a new BatchService instance with injected dependencies
    pub fn new(
        transaction_service: Arc<dyn TransactionServiceTrait>,
        stock_service: Arc<dyn StockServiceTrait>,
        cash_service: Arc<dyn CashServiceTrait>,
        inventory_repository: Arc<dyn InventoryRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_service,
            stock_service,
            cash_service,
            inventory_repository,
        }
    }
}

#[async_trait]
impl BatchServiceTrait for BatchService {
    async fn process_batch(&self, batch: NewStockBatch) -> Result<BatchOutcome> {
        batch.validate()?;

        let total = batch.total();
        let summary = batch.summary();
        debug!(
            "Processing {:?} batch: {} lines, total {}, wallet {}",
            batch.direction,
            batch.lines.len(),
            total,
            batch.wallet_id
        );

        let description_name = match batch.direction {
            BatchDirection::In => DESCRIPTION_PURCHASE,
            BatchDirection::Out => DESCRIPTION_SALE,
        };
        let description_id = self
            .transaction_service
            .resolve_description(description_name)
            .await?;

        let transaction = self
            .transaction_service
            .create(NewFinancialTransaction {
                direction: batch.direction.financial_direction(),
                total,
                wallet_id: Some(batch.wallet_id.clone()),
                description_id,
                note: Some(match &batch.note {
                    Some(note) => format!("{}; {}", note, summary),
                    None => summary.clone(),
                }),
            })
            .await?;

        let mut skipped_items = Vec::new();
        for line in &batch.lines {
            let item = match self.inventory_repository.get_item(&line.item_id).await? {
                Some(item) => item,
                None => {
                    warn!("Skipping batch line: unknown item {}", line.item_id);
                    skipped_items.push(line.item_name.clone());
                    continue;
                }
            };
            if self
                .inventory_repository
                .get_location(&line.location_id)
                .await?
                .is_none()
            {
                warn!("Skipping batch line: unknown location {}", line.location_id);
                skipped_items.push(line.item_name.clone());
                continue;
            }

            if batch.direction == BatchDirection::Out {
                let on_hand = self
                    .stock_service
                    .current_stock(&line.item_id, &line.location_id)
                    .await?;
                if line.quantity > on_hand {
                    warn!(
                        "Aborting batch {}: '{}' has {} on hand, {} requested",
                        transaction.id, item.name, on_hand, line.quantity
                    );
                    return Err(StockError::Insufficient {
                        item: item.name,
                        requested: line.quantity,
                        on_hand,
                    }
                    .into());
                }
            }

            let signed_quantity = match batch.direction {
                BatchDirection::In => line.quantity,
                BatchDirection::Out => -line.quantity,
            };
            self.stock_service
                .record_movement(NewStockMovement {
                    item_id: line.item_id.clone(),
                    location_id: line.location_id.clone(),
                    movement_type: batch.direction.movement_type(),
                    quantity: line.quantity,
                    price: line.price,
                    wallet_id: Some(batch.wallet_id.clone()),
                    transaction_id: Some(transaction.id.clone()),
                    description: Some(description_name.to_string()),
                    note: Some(format!("{} oleh {}", description_name, batch.admin)),
                })
                .await?;
            self.stock_service
                .apply_delta(&line.item_id, &line.location_id, signed_quantity)
                .await?;
        }

        let balance = self.cash_service.balance(&batch.wallet_id).await?;
        let new_balance = match batch.direction {
            BatchDirection::In => balance - total,
            BatchDirection::Out => balance + total,
        };
        self.cash_service
            .set_balance(&batch.wallet_id, new_balance, Some(description_name))
            .await?;

        Ok(BatchOutcome {
            transaction_id: transaction.id,
            total,
            skipped_items,
        })
    }
}
