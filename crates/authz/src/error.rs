use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthzError>;

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("Database error: {0}")]
    Database(#[from] shipping_database::DatabaseError),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}
