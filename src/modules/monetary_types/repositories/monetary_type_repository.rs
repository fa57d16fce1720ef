use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::monetary_types::models::MonetaryType;

/// MySQL persistence for monetary types
pub struct MonetaryTypeRepository {
    pool: MySqlPool,
}

impl MonetaryTypeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<MonetaryType>> {
        let monetary_type = sqlx::query_as::<_, MonetaryType>(
            "SELECT id, name FROM monetary_types WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(monetary_type)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MonetaryType>> {
        let monetary_types = sqlx::query_as::<_, MonetaryType>(
            "SELECT id, name FROM monetary_types ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(monetary_types)
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MonetaryType>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let monetary_types = sqlx::query_as::<_, MonetaryType>(
            "SELECT id, name FROM monetary_types WHERE LOWER(name) LIKE ? \
             ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(monetary_types)
    }

    pub async fn insert(&self, monetary_type: &MonetaryType) -> Result<()> {
        sqlx::query("INSERT INTO monetary_types (id, name) VALUES (?, ?)")
            .bind(&monetary_type.id)
            .bind(&monetary_type.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM monetary_types WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
