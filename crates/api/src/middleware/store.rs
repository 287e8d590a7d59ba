use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shipping_tenant::{StoreContext, StoreSelector, TenantError};
use std::sync::Arc;

/// Resolve the merchant store and language of a request into a `StoreContext`
pub async fn resolve_store(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let selector = StoreSelector::from_request(
        request.uri(),
        request.headers(),
        &state.default_store_code,
    )?;

    let store = state
        .stores
        .find_store(&selector.store_code)
        .await?
        .ok_or_else(|| TenantError::StoreNotFound(selector.store_code.clone()))?;

    let language = selector.language_for(&store);
    tracing::debug!("Resolved store {} (language {})", store.code, language.code);

    request
        .extensions_mut()
        .insert(StoreContext::new(store, language));

    Ok(next.run(request).await)
}
