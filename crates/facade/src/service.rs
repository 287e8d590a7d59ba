use crate::error::{Result, ShippingError};
use crate::facade::ShippingFacade;
use async_trait::async_trait;
use shipping_database::{Database, DatabaseError, PackageRepository, ShippingOriginRepository};
use shipping_models::{is_valid_code, MerchantStore, PackageDetails, PersistableAddress, ReadableAddress};
use validator::Validate;

/// Postgres-backed shipping configuration
pub struct ShippingService {
    origin_repo: ShippingOriginRepository,
    package_repo: PackageRepository,
}

impl ShippingService {
    pub fn new(db: Database) -> Self {
        let pool = db.pool().clone();

        Self {
            origin_repo: ShippingOriginRepository::new(pool.clone()),
            package_repo: PackageRepository::new(pool),
        }
    }
}

fn package_error(err: DatabaseError, code: &str, store: &MerchantStore) -> ShippingError {
    match err {
        DatabaseError::NotFound(_) => ShippingError::package_not_found(code, &store.code),
        DatabaseError::DuplicateEntry(_) => ShippingError::package_exists(code, &store.code),
        other => other.into(),
    }
}

#[async_trait]
impl ShippingFacade for ShippingService {
    async fn get_origin(&self, store: &MerchantStore) -> Result<ReadableAddress> {
        let origin = self.origin_repo.find_by_store(store.id).await?;
        Ok(origin.map(ReadableAddress::from).unwrap_or_default())
    }

    async fn save_origin(&self, address: PersistableAddress, store: &MerchantStore) -> Result<()> {
        address.validate()?;

        self.origin_repo.upsert(store.id, &address).await?;
        tracing::info!("Shipping origin saved for store {}", store.code);
        Ok(())
    }

    async fn list_packages(&self, store: &MerchantStore) -> Result<Vec<PackageDetails>> {
        let packages = self.package_repo.list_by_store(store.id).await?;
        Ok(packages.into_iter().map(PackageDetails::from).collect())
    }

    async fn get_package(&self, code: &str, store: &MerchantStore) -> Result<PackageDetails> {
        let package = self
            .package_repo
            .find_by_code(store.id, code)
            .await
            .map_err(|e| package_error(e, code, store))?;
        Ok(package.into())
    }

    async fn create_package(&self, details: PackageDetails, store: &MerchantStore) -> Result<()> {
        details.validate()?;

        self.package_repo
            .create(store.id, &details)
            .await
            .map_err(|e| package_error(e, &details.code, store))?;
        tracing::info!("Package {} created for store {}", details.code, store.code);
        Ok(())
    }

    async fn update_package(&self, code: &str, mut details: PackageDetails, store: &MerchantStore) -> Result<()> {
        // A code that could never have been created cannot exist
        if !is_valid_code(code) {
            return Err(ShippingError::package_not_found(code, &store.code));
        }
        details.code = code.to_string();
        details.validate()?;

        self.package_repo
            .update(store.id, code, &details)
            .await
            .map_err(|e| package_error(e, code, store))?;
        tracing::info!("Package {} updated for store {}", code, store.code);
        Ok(())
    }

    async fn delete_package(&self, code: &str, store: &MerchantStore) -> Result<()> {
        self.package_repo
            .delete(store.id, code)
            .await
            .map_err(|e| package_error(e, code, store))?;
        tracing::info!("Package {} deleted for store {}", code, store.code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipping_database::{DatabaseConfig, MerchantStoreRepository};
    use shipping_models::ShippingPackageType;

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

    fn address(city: &str, zone: Option<&str>, country: &str) -> PersistableAddress {
        PersistableAddress {
            address: Some("10 Dock Street".to_string()),
            city: Some(city.to_string()),
            postal_code: Some("10001".to_string()),
            state_province: zone.map(|_| "New York".to_string()),
            zone: zone.map(str::to_string),
            country: country.to_string(),
        }
    }

    /// A migrated database and a fresh store of its own
    async fn service_with_store() -> (ShippingService, MerchantStore) {
        let db = Database::new(DatabaseConfig::from_env()).await.expect("Failed to connect to database");
        db.migrate().await.expect("Failed to run migrations");

        let stores = MerchantStoreRepository::new(db.pool().clone());
        let code = format!("IT{}", uuid::Uuid::new_v4().simple());
        let store = stores
            .create(&MerchantStore::new(code, "Integration store", "en"))
            .await
            .expect("Failed to create store");

        (ShippingService::new(db), store)
    }

    #[tokio::test]
    #[ignore] // Only run with database available
    async fn test_package_lifecycle_against_postgres() {
        let (service, store) = service_with_store().await;

        service.create_package(package("BOX-A", 25.0), &store).await.unwrap();
        assert!(matches!(
            service.create_package(package("BOX-A", 30.0), &store).await,
            Err(ShippingError::AlreadyExists(_))
        ));
        assert_eq!(service.get_package("BOX-A", &store).await.unwrap(), package("BOX-A", 25.0));

        service.delete_package("BOX-A", &store).await.unwrap();
        assert!(matches!(
            service.delete_package("BOX-A", &store).await,
            Err(ShippingError::NotFound(_))
        ));
    }

    #[tokio::test]
    #[ignore] // Only run with database available
    async fn test_origin_upsert_replaces_every_field() {
        let (service, store) = service_with_store().await;
        assert_eq!(service.get_origin(&store).await.unwrap(), ReadableAddress::default());

        service.save_origin(address("New York", Some("NY"), "US"), &store).await.unwrap();
        let second = address("Albany", None, "us");
        service.save_origin(second.clone(), &store).await.unwrap();

        let origin = service.get_origin(&store).await.unwrap();
        assert_eq!(origin, ReadableAddress::from(&second));
        assert_eq!(origin.zone, None);
        assert_eq!(origin.state_province, None);
        assert_eq!(origin.country.as_deref(), Some("US"));
    }

    #[tokio::test]
    #[ignore] // Only run with database available
    async fn test_listing_order_and_updates_against_postgres() {
        let (service, store) = service_with_store().await;

        for (code, width) in [("SMALL", 10.0), ("LARGE", 50.0), ("MEDIUM", 30.0)] {
            service.create_package(package(code, width), &store).await.unwrap();
        }
        let codes: Vec<String> = service
            .list_packages(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.code)
            .collect();
        assert_eq!(codes, vec!["SMALL", "LARGE", "MEDIUM"]);

        // The path code wins over the body
        service.update_package("SMALL", package("RENAMED", 11.0), &store).await.unwrap();
        assert_eq!(service.get_package("SMALL", &store).await.unwrap(), package("SMALL", 11.0));
        assert!(matches!(
            service.get_package("RENAMED", &store).await,
            Err(ShippingError::NotFound(_))
        ));

        assert!(matches!(
            service.update_package("GHOST", package("GHOST", 5.0), &store).await,
            Err(ShippingError::NotFound(_))
        ));
        assert_eq!(service.list_packages(&store).await.unwrap().len(), 3);
    }
}
