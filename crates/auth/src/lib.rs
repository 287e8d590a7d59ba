pub mod authenticator;
pub mod error;
pub mod jwt;

pub use authenticator::{extract_bearer_token, Authenticator};
pub use error::{AuthError, Result};
pub use jwt::{Claims, JwtService, TokenType};
