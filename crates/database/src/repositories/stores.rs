use crate::error::{DatabaseError, Result};
use shipping_models::MerchantStore;
use sqlx::PgPool;

#[derive(Clone)]
pub struct MerchantStoreRepository {
    pool: PgPool,
}

impl MerchantStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find store by code
    pub async fn find_by_code(&self, code: &str) -> Result<Option<MerchantStore>> {
        let store = sqlx::query_as::<_, MerchantStore>(
            "SELECT * FROM merchant_stores WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    /// Register a store
    pub async fn create(&self, store: &MerchantStore) -> Result<MerchantStore> {
        let created = sqlx::query_as::<_, MerchantStore>(
            r#"
            INSERT INTO merchant_stores (id, code, name, default_language)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(store.id)
        .bind(&store.code)
        .bind(&store.name)
        .bind(&store.default_language)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if crate::error::is_unique_violation(&e) {
                DatabaseError::duplicate("Merchant store", &format!("code {}", store.code))
            } else {
                DatabaseError::from(e)
            }
        })?;

        Ok(created)
    }
}
