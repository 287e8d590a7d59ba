use crate::error::{is_unique_violation, DatabaseError, Result};
use shipping_models::{PackageDetails, PackageRecord};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PackageRepository {
    pool: PgPool,
}

impl PackageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List packages of a store in creation order
    pub async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<PackageRecord>> {
        let packages = sqlx::query_as::<_, PackageRecord>(
            "SELECT * FROM shipping_packages WHERE store_id = $1 ORDER BY created_at, id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(packages)
    }

    pub async fn find_by_code(&self, store_id: Uuid, code: &str) -> Result<PackageRecord> {
        let package = sqlx::query_as::<_, PackageRecord>(
            "SELECT * FROM shipping_packages WHERE store_id = $1 AND code = $2",
        )
        .bind(store_id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Package", code))?;

        Ok(package)
    }

    /// Insert a package. Fails with `DuplicateEntry` when the code is taken in this store.
    pub async fn create(&self, store_id: Uuid, details: &PackageDetails) -> Result<PackageRecord> {
        let package = sqlx::query_as::<_, PackageRecord>(
            r#"
            INSERT INTO shipping_packages
                (id, store_id, code, package_type, shipping_weight, shipping_max_weight,
                 shipping_length, shipping_height, shipping_width, shipping_quantity,
                 threshold, item_name, default_packaging)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(store_id)
        .bind(&details.code)
        .bind(details.package_type)
        .bind(details.shipping_weight)
        .bind(details.shipping_max_weight)
        .bind(details.shipping_length)
        .bind(details.shipping_height)
        .bind(details.shipping_width)
        .bind(details.shipping_quantity)
        .bind(details.threshold)
        .bind(&details.item_name)
        .bind(details.default_packaging)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DatabaseError::duplicate("Package", &format!("code {}", details.code))
            } else {
                DatabaseError::from(e)
            }
        })?;

        Ok(package)
    }

    /// Replace the specification of an existing package, keeping its code.
    pub async fn update(&self, store_id: Uuid, code: &str, details: &PackageDetails) -> Result<PackageRecord> {
        let package = sqlx::query_as::<_, PackageRecord>(
            r#"
            UPDATE shipping_packages SET
                package_type = $3,
                shipping_weight = $4,
                shipping_max_weight = $5,
                shipping_length = $6,
                shipping_height = $7,
                shipping_width = $8,
                shipping_quantity = $9,
                threshold = $10,
                item_name = $11,
                default_packaging = $12,
                updated_at = NOW()
            WHERE store_id = $1 AND code = $2
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(code)
        .bind(details.package_type)
        .bind(details.shipping_weight)
        .bind(details.shipping_max_weight)
        .bind(details.shipping_length)
        .bind(details.shipping_height)
        .bind(details.shipping_width)
        .bind(details.shipping_quantity)
        .bind(details.threshold)
        .bind(&details.item_name)
        .bind(details.default_packaging)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Package", code))?;

        Ok(package)
    }

    pub async fn delete(&self, store_id: Uuid, code: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM shipping_packages WHERE store_id = $1 AND code = $2")
            .bind(store_id)
            .bind(code)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Package", code));
        }

        Ok(())
    }
}
