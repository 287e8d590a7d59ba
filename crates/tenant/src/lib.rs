// Tenant (merchant store) and language resolution for incoming requests

pub mod context;
pub mod error;
pub mod extractor;
pub mod resolver;

pub use context::StoreContext;
pub use error::{Result, TenantError};
pub use extractor::{StoreSelector, STORE_HEADER};
pub use resolver::{InMemoryStoreResolver, StoreResolver};
