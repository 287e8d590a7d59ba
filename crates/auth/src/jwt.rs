use crate::error::{AuthError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,           // User name
    pub exp: i64,              // Expiration time
    pub iat: i64,              // Issued at
    pub jti: String,           // JWT ID (unique identifier)
    pub token_type: TokenType, // always "access"
}

/// Only access tokens are accepted; any other `token_type` fails to decode.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_token_exp_minutes: i64,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            access_token_exp_minutes: 60, // 1 hour default
        }
    }

    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| AuthError::ConfigurationError("JWT_SECRET must be set".to_string()))?;

        let access_token_exp_minutes = std::env::var("JWT_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(Self::new(&secret).with_access_token_minutes(access_token_exp_minutes))
    }

    pub fn with_access_token_minutes(mut self, minutes: i64) -> Self {
        self.access_token_exp_minutes = minutes;
        self
    }

    /// Issue an access token for a user
    pub fn generate_access_token(&self, user_name: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.access_token_exp_minutes);

        let claims = Claims {
            sub: user_name.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: TokenType::Access,
        };

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Check signature and expiry, then decode the claims of an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(self.algorithm);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "test-secret-key-min-32-characters-long";

    #[test]
    fn test_generate_and_validate_access_token() {
        let jwt = JwtService::new(SECRET);

        let token = jwt
            .generate_access_token("shipping@store.com")
            .expect("Failed to generate token");

        let claims = jwt
            .validate_access_token(&token)
            .expect("Failed to validate token");

        assert_eq!(claims.sub, "shipping@store.com");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_non_access_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = json!({
            "sub": "shipping@store.com",
            "exp": now + 3600,
            "iat": now,
            "jti": "refresh-1",
            "token_type": "refresh",
        });
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = JwtService::new(SECRET).validate_access_token(&token);
        assert!(matches!(result, Err(AuthError::JwtError(_))));
    }

    #[test]
    fn test_expired_token() {
        let jwt = JwtService::new(SECRET).with_access_token_minutes(-10);
        let token = jwt.generate_access_token("shipping@store.com").unwrap();

        let result = jwt.validate_access_token(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = JwtService::new(SECRET);
        let verifier = JwtService::new("another-secret-key-min-32-characters");
        let token = issuer.generate_access_token("shipping@store.com").unwrap();

        assert!(verifier.validate_access_token(&token).is_err());
    }
}
