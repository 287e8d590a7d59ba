pub mod error;
pub mod redis_cache;

pub use error::{CacheError, Result};
pub use redis_cache::{user_groups_cache_key, Cache, CacheConfig};
