use crate::error::Result;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub url: String,
    /// Lifetime of cached group lookups, in seconds
    pub group_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            group_ttl_seconds: 60,
        }
    }
}

impl CacheConfig {
    /// Returns `None` when `REDIS_URL` is not set or the TTL is 0; caching is then disabled.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("REDIS_URL").ok(),
            std::env::var("GROUP_CACHE_TTL_SECONDS").ok().as_deref(),
        )
    }

    fn from_vars(url: Option<String>, ttl: Option<&str>) -> Option<Self> {
        let url = url.filter(|u| !u.trim().is_empty())?;
        let group_ttl_seconds = ttl
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(Self::default().group_ttl_seconds);

        // Redis rejects SETEX with a zero expiry
        if group_ttl_seconds == 0 {
            return None;
        }

        Some(Self {
            url,
            group_ttl_seconds,
        })
    }
}

#[derive(Clone)]
pub struct Cache {
    manager: ConnectionManager,
}

impl Cache {
    pub async fn new(config: CacheConfig) -> Result<Self> {
        let client = Client::open(config.url)?;
        let manager = ConnectionManager::new(client).await?;

        Ok(Self { manager })
    }

    /// Set a value in the cache with optional TTL (seconds)
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: Option<u64>,
    ) -> Result<()> {
        let serialized = serde_json::to_string(value)?;
        let mut conn = self.manager.clone();

        if let Some(ttl) = ttl_seconds {
            conn.set_ex::<_, _, ()>(key, serialized, ttl).await?;
        } else {
            conn.set::<_, _, ()>(key, serialized).await?;
        }

        Ok(())
    }

    /// Get a value from the cache
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(s) => {
                let deserialized = serde_json::from_str(&s)?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// Delete a key from the cache
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.manager.clone();
        conn.del::<_, ()>(key).await?;
        Ok(())
    }

    /// Ping Redis to check connection
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.manager.clone();
        redis::cmd("PING").query_async::<()>(&mut conn).await?;
        Ok(())
    }
}

/// Cache key of one user's groups in one store
pub fn user_groups_cache_key(store_code: &str, user_name: &str) -> String {
    format!("shipping:groups:{}:{}", store_code, user_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_keys_are_store_scoped() {
        let key = user_groups_cache_key("DEFAULT", "admin@shop.com");
        assert_eq!(key, "shipping:groups:DEFAULT:admin@shop.com");
        assert_ne!(key, user_groups_cache_key("OTHER", "admin@shop.com"));
    }

    #[test]
    fn test_config_requires_url() {
        assert!(CacheConfig::from_vars(None, Some("30")).is_none());
        assert!(CacheConfig::from_vars(Some("  ".to_string()), None).is_none());
    }

    #[test]
    fn test_config_ttl() {
        let url = || Some("redis://cache:6379".to_string());

        let config = CacheConfig::from_vars(url(), None).unwrap();
        assert_eq!(config.group_ttl_seconds, 60);
        assert_eq!(CacheConfig::from_vars(url(), Some("15")).unwrap().group_ttl_seconds, 15);
        assert_eq!(CacheConfig::from_vars(url(), Some("soon")).unwrap().group_ttl_seconds, 60);
    }

    #[test]
    fn test_zero_ttl_disables_caching() {
        assert!(CacheConfig::from_vars(Some("redis://cache:6379".to_string()), Some("0")).is_none());
    }

    #[tokio::test]
    #[ignore] // Only run with Redis available
    async fn test_redis_connection() {
        let config = CacheConfig::from_env().unwrap_or_default();
        let cache = Cache::new(config).await.expect("Failed to connect to Redis");
        cache.ping().await.expect("Failed to ping Redis");
    }

    #[tokio::test]
    #[ignore]
    async fn test_set_get() {
        let config = CacheConfig::from_env().unwrap_or_default();
        let cache = Cache::new(config).await.unwrap();

        cache.set("test_key", &vec!["SHIPPING"], Some(60)).await.unwrap();
        let value: Option<Vec<String>> = cache.get("test_key").await.unwrap();

        assert_eq!(value, Some(vec!["SHIPPING".to_string()]));
        cache.delete("test_key").await.unwrap();
    }
}
