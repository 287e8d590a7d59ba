use crate::error::{Result, ShippingError};
use crate::facade::ShippingFacade;
use async_trait::async_trait;
use shipping_models::{is_valid_code, MerchantStore, PackageDetails, PersistableAddress, ReadableAddress};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Default)]
struct StoreShipping {
    origin: Option<ReadableAddress>,
    // Creation order
    packages: Vec<PackageDetails>,
}

/// Shipping configuration kept in process memory, keyed by store id.
/// Applies the same rules as the Postgres-backed service.
#[derive(Default)]
pub struct InMemoryShippingFacade {
    stores: RwLock<HashMap<Uuid, StoreShipping>>,
}

impl InMemoryShippingFacade {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShippingFacade for InMemoryShippingFacade {
    async fn get_origin(&self, store: &MerchantStore) -> Result<ReadableAddress> {
        let stores = self.stores.read().await;
        Ok(stores
            .get(&store.id)
            .and_then(|s| s.origin.clone())
            .unwrap_or_default())
    }

    async fn save_origin(&self, address: PersistableAddress, store: &MerchantStore) -> Result<()> {
        address.validate()?;

        let mut stores = self.stores.write().await;
        stores.entry(store.id).or_default().origin = Some(ReadableAddress::from(&address));
        Ok(())
    }

    async fn list_packages(&self, store: &MerchantStore) -> Result<Vec<PackageDetails>> {
        let stores = self.stores.read().await;
        Ok(stores
            .get(&store.id)
            .map(|s| s.packages.clone())
            .unwrap_or_default())
    }

    async fn get_package(&self, code: &str, store: &MerchantStore) -> Result<PackageDetails> {
        let stores = self.stores.read().await;
        stores
            .get(&store.id)
            .and_then(|s| s.packages.iter().find(|p| p.code == code))
            .cloned()
            .ok_or_else(|| ShippingError::package_not_found(code, &store.code))
    }

    async fn create_package(&self, details: PackageDetails, store: &MerchantStore) -> Result<()> {
        details.validate()?;

        let mut stores = self.stores.write().await;
        let shipping = stores.entry(store.id).or_default();
        if shipping.packages.iter().any(|p| p.code == details.code) {
            return Err(ShippingError::package_exists(&details.code, &store.code));
        }
        shipping.packages.push(details);
        Ok(())
    }

    async fn update_package(&self, code: &str, mut details: PackageDetails, store: &MerchantStore) -> Result<()> {
        // A code that could never have been created cannot exist
        if !is_valid_code(code) {
            return Err(ShippingError::package_not_found(code, &store.code));
        }
        details.code = code.to_string();
        details.validate()?;

        let mut stores = self.stores.write().await;
        let existing = stores
            .get_mut(&store.id)
            .and_then(|s| s.packages.iter_mut().find(|p| p.code == code))
            .ok_or_else(|| ShippingError::package_not_found(code, &store.code))?;
        *existing = details;
        Ok(())
    }

    async fn delete_package(&self, code: &str, store: &MerchantStore) -> Result<()> {
        let mut stores = self.stores.write().await;
        let packages = stores
            .get_mut(&store.id)
            .map(|s| &mut s.packages)
            .ok_or_else(|| ShippingError::package_not_found(code, &store.code))?;

        let before = packages.len();
        packages.retain(|p| p.code != code);
        if packages.len() == before {
            return Err(ShippingError::package_not_found(code, &store.code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipping_models::ShippingPackageType;

    fn store(code: &str) -> MerchantStore {
        MerchantStore::new(code, code, "en")
    }

    fn package(code: &str, width: f64) -> PackageDetails {
        PackageDetails {
            code: code.to_string(),
            package_type: ShippingPackageType::Box,
            shipping_weight: 0.4,
            shipping_max_weight: 15.0,
            shipping_length: 35.0,
            shipping_height: 20.0,
            shipping_width: width,
            shipping_quantity: 1,
            threshold: 0,
            item_name: String::new(),
            default_packaging: false,
        }
    }

    fn address(city: &str) -> PersistableAddress {
        PersistableAddress {
            address: Some("10 Dock Street".to_string()),
            city: Some(city.to_string()),
            postal_code: Some("10001".to_string()),
            state_province: None,
            zone: Some("NY".to_string()),
            country: "US".to_string(),
        }
    }

    #[tokio::test]
    async fn test_origin_defaults_to_empty_then_replaced_wholesale() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");

        assert_eq!(facade.get_origin(&t1).await.unwrap(), ReadableAddress::default());

        facade.save_origin(address("New York"), &t1).await.unwrap();
        let mut second = address("Albany");
        second.zone = None;
        facade.save_origin(second.clone(), &t1).await.unwrap();

        let origin = facade.get_origin(&t1).await.unwrap();
        assert_eq!(origin, ReadableAddress::from(&second));
        assert_eq!(origin.zone, None);
    }

    #[tokio::test]
    async fn test_invalid_origin_is_rejected() {
        let facade = InMemoryShippingFacade::new();
        let mut bad = address("New York");
        bad.country = "USA".to_string();

        let err = facade.save_origin(bad, &store("T1")).await.unwrap_err();
        assert!(matches!(err, ShippingError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_package_crud_keeps_creation_order() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");

        assert!(facade.list_packages(&t1).await.unwrap().is_empty());

        facade.create_package(package("SMALL", 10.0), &t1).await.unwrap();
        facade.create_package(package("LARGE", 50.0), &t1).await.unwrap();
        let codes: Vec<_> = facade
            .list_packages(&t1)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec!["SMALL", "LARGE"]);

        let err = facade.create_package(package("SMALL", 12.0), &t1).await.unwrap_err();
        assert!(matches!(err, ShippingError::AlreadyExists(_)));

        facade.update_package("SMALL", package("IGNORED", 11.0), &t1).await.unwrap();
        let updated = facade.get_package("SMALL", &t1).await.unwrap();
        assert_eq!(updated, package("SMALL", 11.0));
        assert!(facade.get_package("IGNORED", &t1).await.is_err());
    }

    #[tokio::test]
    async fn test_update_missing_package_creates_nothing() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");

        let err = facade.update_package("BOX-A", package("BOX-A", 10.0), &t1).await.unwrap_err();
        assert!(matches!(err, ShippingError::NotFound(_)));
        assert!(facade.list_packages(&t1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_malformed_code_is_not_found() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");

        for code in ["bad code".to_string(), "X".repeat(101)] {
            let err = facade.update_package(&code, package("BOX-A", 10.0), &t1).await.unwrap_err();
            assert!(matches!(err, ShippingError::NotFound(_)), "{}", code);
        }
        assert!(facade.list_packages(&t1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_second_delete_fails() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");

        facade.create_package(package("BOX-A", 10.0), &t1).await.unwrap();
        facade.delete_package("BOX-A", &t1).await.unwrap();

        let err = facade.delete_package("BOX-A", &t1).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: Package [BOX-A] not found for store [T1]");
        assert!(matches!(facade.get_package("BOX-A", &t1).await, Err(ShippingError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stores_are_isolated() {
        let facade = InMemoryShippingFacade::new();
        let t1 = store("T1");
        let t2 = store("T2");

        facade.create_package(package("BOX-A", 10.0), &t2).await.unwrap();
        facade.save_origin(address("New York"), &t2).await.unwrap();

        assert!(matches!(facade.get_package("BOX-A", &t1).await, Err(ShippingError::NotFound(_))));
        assert!(facade.list_packages(&t1).await.unwrap().is_empty());
        assert!(!facade.get_origin(&t1).await.unwrap().active);

        // Same code may exist independently in another store
        facade.create_package(package("BOX-A", 99.0), &t1).await.unwrap();
        assert_eq!(facade.get_package("BOX-A", &t2).await.unwrap().shipping_width, 10.0);
    }
}
