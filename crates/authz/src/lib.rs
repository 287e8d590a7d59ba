pub mod engine;
pub mod error;
pub mod groups;

pub use engine::{Authorizer, GroupAuthorizer};
pub use error::{AuthzError, Result};
pub use groups::{CachedGroupSource, GroupCache, GroupSource, InMemoryGroupSource};
