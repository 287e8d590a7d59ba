use crate::error::Result;
use shipping_models::{PersistableAddress, ShippingOrigin};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ShippingOriginRepository {
    pool: PgPool,
}

impl ShippingOriginRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_store(&self, store_id: Uuid) -> Result<Option<ShippingOrigin>> {
        let origin = sqlx::query_as::<_, ShippingOrigin>(
            "SELECT * FROM shipping_origins WHERE store_id = $1",
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(origin)
    }

    /// Insert or replace every column of the store's origin
    pub async fn upsert(&self, store_id: Uuid, address: &PersistableAddress) -> Result<ShippingOrigin> {
        let origin = sqlx::query_as::<_, ShippingOrigin>(
            r#"
            INSERT INTO shipping_origins
                (store_id, active, address, city, postal_code, state_province, zone, country, updated_at)
            VALUES ($1, TRUE, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (store_id) DO UPDATE SET
                active = TRUE,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                postal_code = EXCLUDED.postal_code,
                state_province = EXCLUDED.state_province,
                zone = EXCLUDED.zone,
                country = EXCLUDED.country,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(&address.address)
        .bind(&address.city)
        .bind(&address.postal_code)
        .bind(&address.state_province)
        .bind(&address.zone)
        .bind(address.country.to_ascii_uppercase())
        .fetch_one(&self.pool)
        .await?;

        Ok(origin)
    }
}
