use crate::error::Result;
use async_trait::async_trait;
use shipping_database::MerchantStoreRepository;
use shipping_models::MerchantStore;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Looks up merchant stores by code.
#[async_trait]
pub trait StoreResolver: Send + Sync {
    async fn find_store(&self, code: &str) -> Result<Option<MerchantStore>>;
}

#[async_trait]
impl StoreResolver for MerchantStoreRepository {
    async fn find_store(&self, code: &str) -> Result<Option<MerchantStore>> {
        Ok(self.find_by_code(code).await?)
    }
}

#[derive(Default)]
pub struct InMemoryStoreResolver {
    stores: RwLock<HashMap<String, MerchantStore>>,
}

impl InMemoryStoreResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, store: MerchantStore) {
        self.stores.write().await.insert(store.code.clone(), store);
    }
}

#[async_trait]
impl StoreResolver for InMemoryStoreResolver {
    async fn find_store(&self, code: &str) -> Result<Option<MerchantStore>> {
        Ok(self.stores.read().await.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_lookup() {
        let resolver = InMemoryStoreResolver::new();
        resolver.insert(MerchantStore::new("DEFAULT", "Default", "en")).await;

        let found = resolver.find_store("DEFAULT").await.unwrap();
        assert_eq!(found.map(|s| s.name), Some("Default".to_string()));
        assert!(resolver.find_store("default").await.unwrap().is_none());
    }
}
