#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::transactions::{
        FinancialTransaction, NewFinancialTransaction, TransactionDescription,
        TransactionDirection, TransactionRepositoryTrait, TransactionService,
        TransactionServiceTrait,
    };
    use crate::Result;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct MockTransactionRepository {
        transactions: Arc<Mutex<Vec<FinancialTransaction>>>,
        descriptions: Arc<Mutex<Vec<TransactionDescription>>>,
    }

    impl MockTransactionRepository {
        fn new() -> Self {
            Self {
                transactions: Arc::new(Mutex::new(Vec::new())),
                descriptions: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn add_description(&self, id: &str, name: &str) {
            self.descriptions.lock().unwrap().push(TransactionDescription {
                id: id.to_string(),
                name: name.to_string(),
            });
        }
    }

    #[async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        async fn insert_transaction(
            &self,
            new_transaction: NewFinancialTransaction,
        ) -> Result<FinancialTransaction> {
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

        async fn find_description_by_name(
            &self,
            name: &str,
        ) -> Result<Option<TransactionDescription>> {
            Ok(self
                .descriptions
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.name == name)
                .cloned())
        }
    }

    #[tokio::test]
    async fn test_create_records_transaction() {
        let repo = Arc::new(MockTransactionRepository::new());
        let svc = TransactionService::new(repo.clone());

        let tx = svc
            .create(NewFinancialTransaction {
                direction: TransactionDirection::In,
                total: 2500,
                wallet_id: Some("w1".to_string()),
                description_id: None,
                note: Some("penjualan".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(tx.total, 2500);
        assert_eq!(tx.direction, TransactionDirection::In);
        assert_eq!(repo.transactions.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_negative_total() {
        let repo = Arc::new(MockTransactionRepository::new());
        let svc = TransactionService::new(repo.clone());

        let result = svc
            .create(NewFinancialTransaction {
                direction: TransactionDirection::In,
                total: -100,
                wallet_id: None,
                description_id: None,
                note: None,
            })
            .await;
        assert!(matches!(result, Err(Error::Transaction(_))));
        assert!(repo.transactions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_wallet_reference() {
        let repo = Arc::new(MockTransactionRepository::new());
        let svc = TransactionService::new(repo);

        let result = svc
            .create(NewFinancialTransaction {
                direction: TransactionDirection::Out,
                total: 100,
                wallet_id: Some("  ".to_string()),
                description_id: None,
                note: None,
            })
            .await;
        assert!(matches!(result, Err(Error::Transaction(_))));
    }

    #[tokio::test]
    async fn test_resolve_description() {
        let repo = Arc::new(MockTransactionRepository::new());
        repo.add_description("d1", "Penjualan");
        let svc = TransactionService::new(repo);

        assert_eq!(
            svc.resolve_description("Penjualan").await.unwrap(),
            Some("d1".to_string())
        );
        // A missing tag resolves to None rather than failing.
        assert_eq!(svc.resolve_description("Hibah").await.unwrap(), None);
    }

    #[test]
    fn test_direction_inverse() {
        assert_eq!(
            TransactionDirection::In.inverse(),
            TransactionDirection::Out
        );
        assert_eq!(
            TransactionDirection::Out.inverse(),
            TransactionDirection::In
        );
    }
}
