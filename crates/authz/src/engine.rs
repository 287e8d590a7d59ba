use crate::error::{AuthzError, Result};
use crate::groups::GroupSource;
use async_trait::async_trait;
use shipping_models::{AuthenticatedUser, Group, MerchantStore};

/// Decides whether a user may act on a store's data.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Succeeds when `user` holds at least one of `allowed` in `store`.
    async fn authorize(&self, user: &AuthenticatedUser, allowed: &[Group], store: &MerchantStore) -> Result<()>;
}

/// Grants access when the user's groups in the store intersect the allowed set.
pub struct GroupAuthorizer<S> {
    groups: S,
}

impl<S: GroupSource> GroupAuthorizer<S> {
    pub fn new(groups: S) -> Self {
        Self { groups }
    }
}

#[async_trait]
impl<S: GroupSource> Authorizer for GroupAuthorizer<S> {
    async fn authorize(&self, user: &AuthenticatedUser, allowed: &[Group], store: &MerchantStore) -> Result<()> {
        let held = self.groups.groups_for(user, store).await?;

        if held.iter().any(|group| allowed.contains(group)) {
            tracing::debug!("User {} authorized for store {}", user, store.code);
            return Ok(());
        }

        tracing::warn!(
            "User {} denied for store {} (holds {:?}, requires one of {:?})",
            user,
            store.code,
            held,
            allowed
        );

        Err(AuthzError::PermissionDenied(format!(
            "Operation unauthorized for user [{}] and store [{}]",
            user, store.code
        )))
    }
}
