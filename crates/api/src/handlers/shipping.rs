use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use shipping_models::{AuthenticatedUser, PackageDetails, PersistableAddress, ReadableAddress};
use shipping_tenant::StoreContext;
use std::sync::Arc;

// Every handler here runs behind `resolve_store` and `require_route_roles`,
// so the store context and the authorized user are always present.

/// Get the shipping origin of the store
/// GET /api/v1/private/shipping/origin
pub async fn get_origin(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
) -> Result<Json<ReadableAddress>, ApiError> {
    let origin = state.shipping.get_origin(&context.store).await?;
    Ok(Json(origin))
}

/// Replace the shipping origin of the store
/// POST /api/v1/private/shipping/origin
pub async fn save_origin(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(address): Json<PersistableAddress>,
) -> Result<StatusCode, ApiError> {
    state.shipping.save_origin(address, &context.store).await?;

    tracing::info!("{} saved the shipping origin of store {}", user, context.store.code);
    Ok(StatusCode::OK)
}

/// List configured packages
/// GET /api/v1/private/shipping/packages
pub async fn list_packages(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
) -> Result<Json<Vec<PackageDetails>>, ApiError> {
    let packages = state.shipping.list_packages(&context.store).await?;
    Ok(Json(packages))
}

/// Get package details
/// GET /api/v1/private/shipping/package/:code
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
    Path(code): Path<String>,
) -> Result<Json<PackageDetails>, ApiError> {
    let package = state.shipping.get_package(&code, &context.store).await?;
    Ok(Json(package))
}

/// Create a package specification
/// POST /api/v1/private/shipping/package
pub async fn create_package(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(details): Json<PackageDetails>,
) -> Result<StatusCode, ApiError> {
    let code = details.code.clone();
    state.shipping.create_package(details, &context.store).await?;

    tracing::info!("{} created package {} in store {}", user, code, context.store.code);
    Ok(StatusCode::OK)
}

/// Edit a package specification
/// PUT /api/v1/private/shipping/package/:code
pub async fn update_package(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(code): Path<String>,
    Json(details): Json<PackageDetails>,
) -> Result<StatusCode, ApiError> {
    state
        .shipping
        .update_package(&code, details, &context.store)
        .await?;

    tracing::info!("{} updated package {} in store {}", user, code, context.store.code);
    Ok(StatusCode::OK)
}

/// Delete a package specification
/// DELETE /api/v1/private/shipping/package/:code
pub async fn delete_package(
    State(state): State<Arc<AppState>>,
    Extension(context): Extension<StoreContext>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.shipping.delete_package(&code, &context.store).await?;

    tracing::info!("{} deleted package {} from store {}", user, code, context.store.code);
    Ok(StatusCode::OK)
}
