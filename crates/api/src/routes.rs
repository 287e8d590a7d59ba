use crate::handlers;
use crate::middleware;
use crate::AppState;
use axum::{
    http::Method,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use shipping_models::Group;
use std::sync::Arc;

/// Groups allowed to read and change shipping configuration
pub const SHIPPING_MANAGER_ROLES: &[Group] = &[
    Group::Superadmin,
    Group::Admin,
    Group::Shipping,
    Group::AdminRetail,
];

pub const SHIPPING_ORIGIN_PATH: &str = "/api/v1/private/shipping/origin";
pub const SHIPPING_PACKAGES_PATH: &str = "/api/v1/private/shipping/packages";
pub const SHIPPING_PACKAGE_PATH: &str = "/api/v1/private/shipping/package";
pub const SHIPPING_PACKAGE_CODE_PATH: &str = "/api/v1/private/shipping/package/:code";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            RouteMethod::Get => method == Method::GET,
            RouteMethod::Post => method == Method::POST,
            RouteMethod::Put => method == Method::PUT,
            RouteMethod::Delete => method == Method::DELETE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
        }
    }
}

/// Access policy of one protected route
#[derive(Debug)]
pub struct RouteSpec {
    pub method: RouteMethod,
    pub path: &'static str,
    pub operation: &'static str,
    pub roles: &'static [Group],
}

/// Every protected route with the groups it requires. The guard middleware
/// denies any protected route missing from this table.
pub const SHIPPING_ROUTES: &[RouteSpec] = &[
    RouteSpec {
        method: RouteMethod::Get,
        path: SHIPPING_ORIGIN_PATH,
        operation: "get_shipping_origin",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Post,
        path: SHIPPING_ORIGIN_PATH,
        operation: "save_shipping_origin",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: SHIPPING_PACKAGES_PATH,
        operation: "list_packages",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Get,
        path: SHIPPING_PACKAGE_CODE_PATH,
        operation: "get_package",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Post,
        path: SHIPPING_PACKAGE_PATH,
        operation: "create_package",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Put,
        path: SHIPPING_PACKAGE_CODE_PATH,
        operation: "update_package",
        roles: SHIPPING_MANAGER_ROLES,
    },
    RouteSpec {
        method: RouteMethod::Delete,
        path: SHIPPING_PACKAGE_CODE_PATH,
        operation: "delete_package",
        roles: SHIPPING_MANAGER_ROLES,
    },
];

pub fn find_route(method: &Method, path: &str) -> Option<&'static RouteSpec> {
    SHIPPING_ROUTES
        .iter()
        .find(|route| route.path == path && route.method.matches(method))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // Layers run outermost first: store resolution, then the route guard
    let shipping = Router::new()
        .route(
            SHIPPING_ORIGIN_PATH,
            get(handlers::shipping::get_origin).post(handlers::shipping::save_origin),
        )
        .route(SHIPPING_PACKAGES_PATH, get(handlers::shipping::list_packages))
        .route(
            SHIPPING_PACKAGE_PATH,
            post(handlers::shipping::create_package),
        )
        .route(
            SHIPPING_PACKAGE_CODE_PATH,
            get(handlers::shipping::get_package)
                .put(handlers::shipping::update_package)
                .delete(handlers::shipping::delete_package),
        )
        .route_layer(from_fn_with_state(state.clone(), middleware::require_route_roles))
        .layer(from_fn_with_state(state.clone(), middleware::resolve_store));

    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        .merge(shipping)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_operation_uses_the_shipping_manager_roles() {
        assert_eq!(SHIPPING_ROUTES.len(), 7);
        for route in SHIPPING_ROUTES {
            assert_eq!(route.roles, SHIPPING_MANAGER_ROLES, "{}", route.operation);
        }
    }

    #[test]
    fn test_route_table_has_no_duplicates() {
        for (i, a) in SHIPPING_ROUTES.iter().enumerate() {
            for b in &SHIPPING_ROUTES[i + 1..] {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "{} and {} share {} {}",
                    a.operation,
                    b.operation,
                    a.method.as_str(),
                    a.path
                );
            }
        }
    }

    #[test]
    fn test_find_route() {
        let route = find_route(&Method::PUT, SHIPPING_PACKAGE_CODE_PATH).unwrap();
        assert_eq!(route.operation, "update_package");

        assert!(find_route(&Method::PATCH, SHIPPING_PACKAGE_CODE_PATH).is_none());
        assert!(find_route(&Method::GET, "/api/v1/private/shipping/unknown").is_none());
    }

    #[test]
    fn test_manager_roles() {
        assert_eq!(
            SHIPPING_MANAGER_ROLES,
            &[Group::Superadmin, Group::Admin, Group::Shipping, Group::AdminRetail]
        );
        assert!(!SHIPPING_MANAGER_ROLES.contains(&Group::Customer));
    }
}
