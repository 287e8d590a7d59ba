use crate::error::Result;
use async_trait::async_trait;
use shipping_cache::{user_groups_cache_key, Cache, Result as CacheResult};
use shipping_database::UserGroupRepository;
use shipping_models::{AuthenticatedUser, Group, MerchantStore};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Source of the groups a user holds within one store.
#[async_trait]
pub trait GroupSource: Send + Sync {
    async fn groups_for(&self, user: &AuthenticatedUser, store: &MerchantStore) -> Result<Vec<Group>>;
}

#[async_trait]
impl GroupSource for UserGroupRepository {
    async fn groups_for(&self, user: &AuthenticatedUser, store: &MerchantStore) -> Result<Vec<Group>> {
        let names = self.group_names(&user.user_name, store.id).await?;

        let groups = names
            .into_iter()
            .filter_map(|name| match name.parse::<Group>() {
                Ok(group) => Some(group),
                Err(e) => {
                    tracing::warn!("Ignoring binding for user {} in store {}: {}", user, store.code, e);
                    None
                }
            })
            .collect();

        Ok(groups)
    }
}

/// Group bindings held in memory, keyed by store id and user name
#[derive(Default)]
pub struct InMemoryGroupSource {
    bindings: RwLock<HashMap<(Uuid, String), HashSet<Group>>>,
}

impl InMemoryGroupSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn grant(&self, store: &MerchantStore, user_name: &str, group: Group) {
        self.bindings
            .write()
            .await
            .entry((store.id, user_name.to_string()))
            .or_default()
            .insert(group);
    }

    pub async fn revoke(&self, store: &MerchantStore, user_name: &str, group: Group) {
        if let Some(groups) = self
            .bindings
            .write()
            .await
            .get_mut(&(store.id, user_name.to_string()))
        {
            groups.remove(&group);
        }
    }
}

#[async_trait]
impl GroupSource for InMemoryGroupSource {
    async fn groups_for(&self, user: &AuthenticatedUser, store: &MerchantStore) -> Result<Vec<Group>> {
        let bindings = self.bindings.read().await;
        Ok(bindings
            .get(&(store.id, user.user_name.clone()))
            .map(|groups| groups.iter().copied().collect())
            .unwrap_or_default())
    }
}

/// Storage for memoized group lookups
#[async_trait]
pub trait GroupCache: Send + Sync {
    async fn get_groups(&self, key: &str) -> CacheResult<Option<Vec<Group>>>;

    async fn put_groups(&self, key: &str, groups: &[Group], ttl_seconds: u64) -> CacheResult<()>;
}

#[async_trait]
impl GroupCache for Cache {
    async fn get_groups(&self, key: &str) -> CacheResult<Option<Vec<Group>>> {
        self.get(key).await
    }

    async fn put_groups(&self, key: &str, groups: &[Group], ttl_seconds: u64) -> CacheResult<()> {
        self.set(key, &groups, Some(ttl_seconds)).await
    }
}

/// Memoizes another source, in Redis by default. Cache failures fall through to the inner source.
pub struct CachedGroupSource<S, C = Cache> {
    inner: S,
    cache: C,
    ttl_seconds: u64,
}

impl<S: GroupSource, C: GroupCache> CachedGroupSource<S, C> {
    pub fn new(inner: S, cache: C, ttl_seconds: u64) -> Self {
        Self {
            inner,
            cache,
            ttl_seconds,
        }
    }
}

#[async_trait]
impl<S: GroupSource, C: GroupCache> GroupSource for CachedGroupSource<S, C> {
    async fn groups_for(&self, user: &AuthenticatedUser, store: &MerchantStore) -> Result<Vec<Group>> {
        let key = user_groups_cache_key(&store.code, &user.user_name);

        match self.cache.get_groups(&key).await {
            Ok(Some(groups)) => return Ok(groups),
            Ok(None) => {}
            Err(e) => tracing::warn!("Group cache read failed for {}: {}", key, e),
        }

        let groups = self.inner.groups_for(user, store).await?;

        if let Err(e) = self.cache.put_groups(&key, &groups, self.ttl_seconds).await {
            tracing::warn!("Group cache write failed for {}: {}", key, e);
        }

        Ok(groups)
    }
}
