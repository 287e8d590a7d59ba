pub mod guard;
pub mod store;

pub use guard::require_route_roles;
pub use store::resolve_store;
