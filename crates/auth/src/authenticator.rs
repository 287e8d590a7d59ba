use crate::error::{AuthError, Result};
use crate::jwt::JwtService;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use shipping_models::AuthenticatedUser;

/// Resolves the caller of a request to a user identity.
pub trait Authenticator: Send + Sync {
    fn authenticated_user(&self, headers: &HeaderMap) -> Result<AuthenticatedUser>;
}

/// Extract the token from a `Bearer` Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("header is not valid ASCII".to_string()))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AuthError::InvalidHeader("Authorization header must use Bearer scheme".to_string()))
}

impl Authenticator for JwtService {
    fn authenticated_user(&self, headers: &HeaderMap) -> Result<AuthenticatedUser> {
        let token = extract_bearer_token(headers)?;
        let claims = self.validate_access_token(token).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            e
        })?;

        AuthenticatedUser::new(claims.sub)
            .ok_or_else(|| AuthError::InvalidToken("Token subject is empty".to_string()))
    }
}
