use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Group bindings of users, always scoped to one store
#[derive(Clone)]
pub struct UserGroupRepository {
    pool: PgPool,
}

impl UserGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Group names held by a user in a store
    pub async fn group_names(&self, user_name: &str, store_id: Uuid) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT group_name
            FROM user_groups
            WHERE user_name = $1 AND store_id = $2
            ORDER BY group_name
            "#,
        )
        .bind(user_name)
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Grant a group to a user in a store. Granting twice is a no-op.
    pub async fn grant(&self, user_name: &str, store_id: Uuid, group_name: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_groups (user_name, store_id, group_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_name, store_id, group_name) DO NOTHING
            "#,
        )
        .bind(user_name)
        .bind(store_id)
        .bind(group_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
