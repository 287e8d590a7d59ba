use shipping_database::DatabaseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShippingError>;

#[derive(Debug, Error)]
pub enum ShippingError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShippingError {
    pub fn package_not_found(code: &str, store_code: &str) -> Self {
        Self::NotFound(format!("Package [{}] not found for store [{}]", code, store_code))
    }

    pub fn package_exists(code: &str, store_code: &str) -> Self {
        Self::AlreadyExists(format!("Package [{}] already exists for store [{}]", code, store_code))
    }
}

impl From<validator::ValidationErrors> for ShippingError {
    fn from(err: validator::ValidationErrors) -> Self {
        ShippingError::ValidationError(err.to_string())
    }
}

impl From<DatabaseError> for ShippingError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ShippingError::NotFound(msg),
            DatabaseError::DuplicateEntry(msg) => ShippingError::AlreadyExists(msg),
            other => ShippingError::Internal(other.to_string()),
        }
    }
}
