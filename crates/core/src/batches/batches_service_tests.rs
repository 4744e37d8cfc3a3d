#[cfg(test)]
mod tests {
    use crate::batches::{
        BatchDirection, BatchError, BatchLine, BatchService, BatchServiceTrait, NewStockBatch,
    };
    use crate::cash::CashServiceTrait;
    use crate::errors::Error;
    use crate::inventory::{InventoryRepositoryTrait, Item, Location};
    use crate::stock::{NewStockMovement, StockError, StockMovement, StockServiceTrait};
    use crate::transactions::{
        FinancialTransaction, NewFinancialTransaction, TransactionDirection,
        TransactionServiceTrait,
    };
    use crate::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock TransactionService ---
    #[derive(Clone, Default)]
    struct MockTransactionService {
        transactions: Arc<Mutex<Vec<FinancialTransaction>>>,
        descriptions: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MockTransactionService {
        fn add_description(&self, name: &str, id: &str) {
            self.descriptions
                .lock()
                .unwrap()
                .insert(name.to_string(), id.to_string());
        }

        fn transactions(&self) -> Vec<FinancialTransaction> {
            self.transactions.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TransactionServiceTrait for MockTransactionService {
        async fn create(
            &self,
            new_transaction: NewFinancialTransaction,
        ) -> Result<FinancialTransaction> {
            new_transaction.validate()?;
            let transaction = FinancialTransaction {
                id: format!("tx-{}", self.transactions.lock().unwrap().len() + 1),
                direction: new_transaction.direction,
                total: new_transaction.total,
                wallet_id: new_transaction.wallet_id,
                description_id: new_transaction.description_id,
                movement_id: None,
                note: new_transaction.note,
                created_at: Utc::now(),
            };
            self.transactions.lock().unwrap().push(transaction.clone());
            Ok(transaction)
        }

        async fn resolve_description(&self, name: &str) -> Result<Option<String>> {
            Ok(self.descriptions.lock().unwrap().get(name).cloned())
        }
    }

    // --- Mock StockService ---
    #[derive(Clone, Default)]
    struct MockStockService {
        counters: Arc<Mutex<HashMap<(String, String), i64>>>,
        movements: Arc<Mutex<Vec<StockMovement>>>,
    }

    impl MockStockService {
        fn set_stock(&self, item_id: &str, location_id: &str, qty: i64) {
            self.counters
                .lock()
                .unwrap()
                .insert((item_id.to_string(), location_id.to_string()), qty);
        }

        fn stock(&self, item_id: &str, location_id: &str) -> i64 {
            self.counters
                .lock()
                .unwrap()
                .get(&(item_id.to_string(), location_id.to_string()))
                .copied()
                .unwrap_or(0)
        }

        fn movements(&self) -> Vec<StockMovement> {
            self.movements.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StockServiceTrait for MockStockService {
        async fn current_stock(&self, item_id: &str, location_id: &str) -> Result<i64> {
            Ok(self.stock(item_id, location_id))
        }

        async fn record_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement> {
            let movement = StockMovement {
                id: format!("mv-{}", self.movements.lock().unwrap().len() + 1),
                item_id: new_movement.item_id,
                location_id: new_movement.location_id,
                movement_type: new_movement.movement_type,
                quantity: new_movement.quantity,
                price: new_movement.price,
                wallet_id: new_movement.wallet_id,
                transaction_id: new_movement.transaction_id,
                description: new_movement.description,
                note: new_movement.note,
                created_at: Utc::now(),
            };
            self.movements.lock().unwrap().push(movement.clone());
            Ok(movement)
        }

        async fn apply_delta(&self, item_id: &str, location_id: &str, delta: i64) -> Result<i64> {
            let mut counters = self.counters.lock().unwrap();
            let key = (item_id.to_string(), location_id.to_string());
            let current = counters.get(&key).copied().unwrap_or(0);
            let new_qty = (current + delta).max(0);
            counters.insert(key, new_qty);
            Ok(new_qty)
        }
    }

    // --- Mock CashService ---
    #[derive(Clone, Default)]
    struct MockCashService {
        balances: Arc<Mutex<HashMap<String, i64>>>,
    }

    impl MockCashService {
        fn set(&self, wallet_id: &str, amount: i64) {
            self.balances
                .lock()
                .unwrap()
                .insert(wallet_id.to_string(), amount);
        }

        fn get(&self, wallet_id: &str) -> i64 {
            self.balances
                .lock()
                .unwrap()
                .get(wallet_id)
                .copied()
                .unwrap_or(0)
        }
    }

    #[async_trait]
    impl CashServiceTrait for MockCashService {
        async fn balance(&self, wallet_id: &str) -> Result<i64> {
            Ok(self.get(wallet_id))
        }

        async fn set_balance(
            &self,
            wallet_id: &str,
            amount: i64,
            _note: Option<&str>,
        ) -> Result<()> {
            self.set(wallet_id, amount);
            Ok(())
        }
    }

    // --- Mock InventoryRepository ---
    #[derive(Clone, Default)]
    struct MockInventoryRepository {
        items: Arc<Mutex<Vec<Item>>>,
        locations: Arc<Mutex<Vec<Location>>>,
    }

    impl MockInventoryRepository {
        fn add_item(&self, id: &str, name: &str) {
            self.items.lock().unwrap().push(Item {
                id: id.to_string(),
                code: format!("SKU-{}", id),
                name: name.to_string(),
                category_id: None,
                price: 0,
                stock: 0,
                damaged_stock: 0,
            });
        }

        fn add_location(&self, id: &str, name: &str) {
            self.locations.lock().unwrap().push(Location {
                id: id.to_string(),
                name: name.to_string(),
            });
        }
    }

    #[async_trait]
    impl InventoryRepositoryTrait for MockInventoryRepository {
        async fn get_item(&self, item_id: &str) -> Result<Option<Item>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|i| i.id == item_id)
                .cloned())
        }

        async fn get_location(&self, location_id: &str) -> Result<Option<Location>> {
            Ok(self
                .locations
                .lock()
                .unwrap()
                .iter()
                .find(|l| l.id == location_id)
                .cloned())
        }
    }

    struct World {
        transactions: Arc<MockTransactionService>,
        stock: Arc<MockStockService>,
        cash: Arc<MockCashService>,
        service: BatchService,
    }

    fn world() -> World {
        let transactions = Arc::new(MockTransactionService::default());
        transactions.add_description("Pembelian", "d-purchase");
        transactions.add_description("Penjualan", "d-sale");

        let stock = Arc::new(MockStockService::default());
        let cash = Arc::new(MockCashService::default());

        let inventory = Arc::new(MockInventoryRepository::default());
        inventory.add_item("item-a", "Beras");
        inventory.add_item("item-b", "Gula");
        inventory.add_item("item-c", "Kopi");
        inventory.add_location("loc-1", "Gudang");

        let service = BatchService::new(
            transactions.clone(),
            stock.clone(),
            cash.clone(),
            inventory.clone(),
        );
        World {
            transactions,
            stock,
            cash,
            service,
        }
    }

    fn batch_line(item_id: &str, item_name: &str, quantity: i64, price: i64) -> BatchLine {
        BatchLine {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            location_id: "loc-1".to_string(),
            quantity,
            price,
        }
    }

    fn batch(direction: BatchDirection, lines: Vec<BatchLine>) -> NewStockBatch {
        NewStockBatch {
            direction,
            lines,
            wallet_id: "w-kas".to_string(),
            admin: "Sari".to_string(),
            note: None,
        }
    }

    #[tokio::test]
    async fn test_stock_in_spends_money() {
        let w = world();
        w.cash.set("w-kas", 10000);

        let outcome = w
            .service
            .process_batch(batch(
                BatchDirection::In,
                vec![batch_line("item-a", "Beras", 10, 200)],
            ))
            .await
            .unwrap();

        assert_eq!(outcome.total, 2000);
        assert!(outcome.skipped_items.is_empty());

        // Stocking in records money going out, tagged "Pembelian".
        let transactions = w.transactions.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].direction, TransactionDirection::Out);
        assert_eq!(transactions[0].total, 2000);
        assert_eq!(
            transactions[0].description_id.as_deref(),
            Some("d-purchase")
        );

        assert_eq!(w.cash.get("w-kas"), 8000);
        assert_eq!(w.stock.stock("item-a", "loc-1"), 10);

        let movements = w.stock.movements();
        assert_eq!(movements.len(), 1);
        assert_eq!(
            movements[0].transaction_id.as_deref(),
            Some(outcome.transaction_id.as_str())
        );
    }

    #[tokio::test]
    async fn test_stock_out_earns_money() {
        let w = world();
        w.cash.set("w-kas", 1000);
        w.stock.set_stock("item-a", "loc-1", 20);

        let outcome = w
            .service
            .process_batch(batch(
                BatchDirection::Out,
                vec![batch_line("item-a", "Beras", 5, 300)],
            ))
            .await
            .unwrap();

        assert_eq!(outcome.total, 1500);

        let transactions = w.transactions.transactions();
        assert_eq!(transactions[0].direction, TransactionDirection::In);
        assert_eq!(transactions[0].description_id.as_deref(), Some("d-sale"));

        assert_eq!(w.cash.get("w-kas"), 2500);
        assert_eq!(w.stock.stock("item-a", "loc-1"), 15);
    }

    // The sale coordinator always records `in`, while batches invert the
    // stock direction. Both halves pinned here so nobody "fixes" one side.
    #[tokio::test]
    async fn test_financial_direction_is_inverse_of_stock_direction() {
        for (direction, expected) in [
            (BatchDirection::In, TransactionDirection::Out),
            (BatchDirection::Out, TransactionDirection::In),
        ] {
            let w = world();
            w.stock.set_stock("item-a", "loc-1", 100);
            w.service
                .process_batch(batch(direction, vec![batch_line("item-a", "Beras", 1, 100)]))
                .await
                .unwrap();
            assert_eq!(w.transactions.transactions()[0].direction, expected);
        }
    }

    #[tokio::test]
    async fn test_referential_failure_skips_line_and_continues() {
        let w = world();

        let outcome = w
            .service
            .process_batch(batch(
                BatchDirection::In,
                vec![
                    batch_line("item-a", "Beras", 10, 200),
                    batch_line("item-x", "Misteri", 4, 50),
                    batch_line("item-b", "Gula", 2, 100),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(outcome.skipped_items, vec!["Misteri".to_string()]);

        // The surviving lines were written.
        assert_eq!(w.stock.movements().len(), 2);
        assert_eq!(w.stock.stock("item-a", "loc-1"), 10);
        assert_eq!(w.stock.stock("item-b", "loc-1"), 2);

        // The total was fixed before the loop, so the skipped line still
        // counts against the wallet.
        assert_eq!(outcome.total, 10 * 200 + 4 * 50 + 2 * 100);
        assert_eq!(w.cash.get("w-kas"), -outcome.total);
    }

    #[tokio::test]
    async fn test_stock_out_insufficiency_aborts_whole_batch() {
        let w = world();
        w.cash.set("w-kas", 5000);
        w.stock.set_stock("item-a", "loc-1", 3);
        w.stock.set_stock("item-b", "loc-1", 50);
        w.stock.set_stock("item-c", "loc-1", 50);

        let result = w
            .service
            .process_batch(batch(
                BatchDirection::Out,
                vec![
                    batch_line("item-a", "Beras", 10, 100),
                    batch_line("item-b", "Gula", 1, 100),
                    batch_line("item-c", "Kopi", 1, 100),
                ],
            ))
            .await;
        assert!(matches!(
            result,
            Err(Error::Stock(StockError::Insufficient { .. }))
        ));

        // The ledger row already exists; nothing else was touched.
        assert_eq!(w.transactions.transactions().len(), 1);
        assert!(w.stock.movements().is_empty());
        assert_eq!(w.stock.stock("item-a", "loc-1"), 3);
        assert_eq!(w.stock.stock("item-b", "loc-1"), 50);
        assert_eq!(w.cash.get("w-kas"), 5000);
    }

    #[tokio::test]
    async fn test_insufficiency_after_committed_lines_keeps_them() {
        let w = world();
        w.stock.set_stock("item-a", "loc-1", 50);
        w.stock.set_stock("item-b", "loc-1", 1);

        let result = w
            .service
            .process_batch(batch(
                BatchDirection::Out,
                vec![
                    batch_line("item-a", "Beras", 5, 100),
                    batch_line("item-b", "Gula", 10, 100),
                ],
            ))
            .await;
        assert!(matches!(result, Err(Error::Stock(_))));

        // The first line was validated lazily and already written.
        assert_eq!(w.stock.movements().len(), 1);
        assert_eq!(w.stock.stock("item-a", "loc-1"), 45);
        // The wallet balance update never ran.
        assert_eq!(w.cash.get("w-kas"), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_rejected() {
        let w = world();
        let result = w
            .service
            .process_batch(batch(BatchDirection::In, vec![]))
            .await;
        assert!(matches!(result, Err(Error::Batch(BatchError::EmptyBatch))));
        assert!(w.transactions.transactions().is_empty());
    }

    #[tokio::test]
    async fn test_missing_wallet_rejected() {
        let w = world();
        let mut b = batch(
            BatchDirection::In,
            vec![batch_line("item-a", "Beras", 1, 100)],
        );
        b.wallet_id = " ".to_string();
        let result = w.service.process_batch(b).await;
        assert!(matches!(
            result,
            Err(Error::Batch(BatchError::MissingWallet))
        ));
    }

    #[tokio::test]
    async fn test_batch_note_carries_summary() {
        let w = world();
        w.service
            .process_batch(batch(
                BatchDirection::In,
                vec![
                    batch_line("item-a", "Beras", 10, 200),
                    batch_line("item-b", "Gula", 5, 100),
                ],
            ))
            .await
            .unwrap();

        let note = w.transactions.transactions()[0].note.clone().unwrap();
        assert_eq!(note, "10 × Beras, 5 × Gula");
    }
}
