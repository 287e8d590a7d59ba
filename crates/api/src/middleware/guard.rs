use crate::error::ApiError;
use crate::routes;
use crate::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use shipping_tenant::StoreContext;
use std::sync::Arc;

/// Authenticate the caller, then authorize them against the roles the route table
/// declares for the matched route, scoped to the request's store.
///
/// Routes absent from the table are denied.
pub async fn require_route_roles(
    State(state): State<Arc<AppState>>,
    matched_path: MatchedPath,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let route = routes::find_route(request.method(), matched_path.as_str()).ok_or_else(|| {
        tracing::warn!("No access policy for {} {}", request.method(), matched_path.as_str());
        ApiError::Forbidden("No access policy for this route".to_string())
    })?;

    let context = request
        .extensions()
        .get::<StoreContext>()
        .cloned()
        .ok_or_else(|| ApiError::Internal("Store context was not resolved".to_string()))?;

    let user = state.authenticator.authenticated_user(request.headers())?;
    state
        .authorizer
        .authorize(&user, route.roles, &context.store)
        .await?;

    tracing::debug!("{} authorized for {} on store {}", user, route.operation, context.store.code);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
