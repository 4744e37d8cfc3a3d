#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::wallets::{
        NewWallet, Wallet, WalletFlag, WalletRepositoryTrait, WalletService, WalletServiceTrait,
        WalletUpdate,
    };
    use crate::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // --- Mock WalletRepository ---
    #[derive(Clone)]
    struct MockWalletRepository {
        wallets: Arc<Mutex<Vec<Wallet>>>,
    }

    impl MockWalletRepository {
        fn new() -> Self {
            Self {
                wallets: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn add_wallet(&self, wallet: Wallet) {
            self.wallets.lock().unwrap().push(wallet);
        }

        fn snapshot(&self) -> Vec<Wallet> {
            self.wallets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WalletRepositoryTrait for MockWalletRepository {
        async fn find_by_flag(&self, flag: WalletFlag) -> Result<Option<Wallet>> {
            let wallets = self.wallets.lock().unwrap();
            Ok(wallets
                .iter()
                .find(|w| match flag {
                    WalletFlag::Primary => w.is_primary,
                    WalletFlag::Change => w.is_change,
                })
                .cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Wallet>> {
            let wallets = self.wallets.lock().unwrap();
            Ok(wallets.iter().find(|w| w.name == name).cloned())
        }

        async fn list(&self) -> Result<Vec<Wallet>> {
            Ok(self.snapshot())
        }

        async fn insert(&self, wallet: Wallet) -> Result<Wallet> {
            self.wallets.lock().unwrap().push(wallet.clone());
            Ok(wallet)
        }

        async fn update(&self, wallet: Wallet) -> Result<Wallet> {
            let mut wallets = self.wallets.lock().unwrap();
            if let Some(existing) = wallets.iter_mut().find(|w| w.id == wallet.id) {
                *existing = wallet.clone();
            }
            Ok(wallet)
        }

        async fn clear_flag(&self, flag: WalletFlag) -> Result<()> {
            let mut wallets = self.wallets.lock().unwrap();
            for w in wallets.iter_mut() {
                match flag {
                    WalletFlag::Primary => w.is_primary = false,
                    WalletFlag::Change => w.is_change = false,
                }
            }
            Ok(())
        }
    }

    fn wallet(id: &str, name: &str, is_primary: bool, is_change: bool) -> Wallet {
        Wallet {
            id: id.to_string(),
            name: name.to_string(),
            is_primary,
            is_change,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_resolve_by_name() {
        let repo = Arc::new(MockWalletRepository::new());
        repo.add_wallet(wallet("w1", "Omset", false, false));
        let service = WalletService::new(repo);

        let resolved = service.resolve_by_name("Omset").await.unwrap();
        assert_eq!(resolved.id, "w1");

        let missing = service.resolve_by_name("Dompet").await;
        assert!(matches!(missing, Err(Error::Wallet(_))));
    }

    #[tokio::test]
    async fn test_resolve_by_flag() {
        let repo = Arc::new(MockWalletRepository::new());
        repo.add_wallet(wallet("w1", "Omset", false, false));
        repo.add_wallet(wallet("w2", "Kembalian", false, true));
        let service = WalletService::new(repo);

        let change = service.resolve_by_flag(WalletFlag::Change).await.unwrap();
        assert_eq!(change.id, "w2");

        let primary = service.resolve_by_flag(WalletFlag::Primary).await;
        assert!(matches!(primary, Err(Error::Wallet(_))));
    }

    #[tokio::test]
    async fn test_create_wallet_clears_previous_flag_holder() {
        let repo = Arc::new(MockWalletRepository::new());
        repo.add_wallet(wallet("w1", "Kas", true, false));
        let service = WalletService::new(repo.clone());

        let created = service
            .create_wallet(NewWallet {
                name: "Kas Baru".to_string(),
                is_primary: true,
                is_change: false,
            })
            .await
            .unwrap();
        assert!(created.is_primary);

        let primary_holders: Vec<Wallet> = repo
            .snapshot()
            .into_iter()
            .filter(|w| w.is_primary)
            .collect();
        assert_eq!(primary_holders.len(), 1);
        assert_eq!(primary_holders[0].id, created.id);
    }

    #[tokio::test]
    async fn test_update_wallet_keeps_change_flag_exclusive() {
        let repo = Arc::new(MockWalletRepository::new());
        repo.add_wallet(wallet("w1", "Kembalian", false, true));
        repo.add_wallet(wallet("w2", "Laci", false, false));
        let service = WalletService::new(repo.clone());

        service
            .update_wallet(WalletUpdate {
                id: "w2".to_string(),
                name: "Laci".to_string(),
                is_primary: false,
                is_change: true,
                is_active: true,
            })
            .await
            .unwrap();

        let change_holders: Vec<Wallet> = repo
            .snapshot()
            .into_iter()
            .filter(|w| w.is_change)
            .collect();
        assert_eq!(change_holders.len(), 1);
        assert_eq!(change_holders[0].id, "w2");
    }

    #[tokio::test]
    async fn test_create_wallet_rejects_empty_name() {
        let repo = Arc::new(MockWalletRepository::new());
        let service = WalletService::new(repo);

        let result = service
            .create_wallet(NewWallet {
                name: "  ".to_string(),
                is_primary: false,
                is_change: false,
            })
            .await;
        assert!(matches!(result, Err(Error::Wallet(_))));
    }
}
