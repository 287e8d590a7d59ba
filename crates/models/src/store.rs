use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Store code used when a request does not name a store.
pub const DEFAULT_STORE_CODE: &str = "DEFAULT";

/// A merchant store (tenant). Every piece of shipping configuration belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MerchantStore {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub default_language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MerchantStore {
    /// Build a store record that has not been loaded from the database.
    pub fn new(code: impl Into<String>, name: impl Into<String>, default_language: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            default_language: default_language.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request language, as an ISO 639-1 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
}

impl Language {
    /// Parse a two-letter language code. The code is normalised to lowercase.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self {
                code: code.to_ascii_lowercase(),
            })
        } else {
            None
        }
    }

    /// Language of a store, falling back to English when the stored value is malformed.
    pub fn store_default(store: &MerchantStore) -> Self {
        Self::parse(&store.default_language).unwrap_or_else(|| Self {
            code: "en".to_string(),
        })
    }
}
