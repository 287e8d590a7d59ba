use crate::error::Result;
use async_trait::async_trait;
use shipping_models::{MerchantStore, PackageDetails, PersistableAddress, ReadableAddress};

/// Shipping configuration operations, always scoped to one merchant store.
///
/// Implementations own the domain rules:
/// - `get_origin` returns `ReadableAddress::default()` when no origin is configured
/// - `create_package` fails with `AlreadyExists` on a duplicate code
/// - `get_package`, `update_package` and `delete_package` fail with `NotFound`
///   when the code does not exist in the store
/// - `update_package` keeps the code given as argument, whatever the body says
#[async_trait]
pub trait ShippingFacade: Send + Sync {
    async fn get_origin(&self, store: &MerchantStore) -> Result<ReadableAddress>;

    async fn save_origin(&self, address: PersistableAddress, store: &MerchantStore) -> Result<()>;

    async fn list_packages(&self, store: &MerchantStore) -> Result<Vec<PackageDetails>>;

    async fn get_package(&self, code: &str, store: &MerchantStore) -> Result<PackageDetails>;

    async fn create_package(&self, details: PackageDetails, store: &MerchantStore) -> Result<()>;

    async fn update_package(&self, code: &str, details: PackageDetails, store: &MerchantStore) -> Result<()>;

    async fn delete_package(&self, code: &str, store: &MerchantStore) -> Result<()>;
}
