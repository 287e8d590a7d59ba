use thiserror::Error;

pub type Result<T> = std::result::Result<T, TenantError>;

#[derive(Debug, Error)]
pub enum TenantError {
    #[error("Merchant store [{0}] not found")]
    StoreNotFound(String),

    #[error("Invalid merchant store code [{0}]")]
    InvalidStoreCode(String),

    #[error("Database error: {0}")]
    Database(#[from] shipping_database::DatabaseError),
}
