use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::veterinarians::models::{Veterinarian, VeterinarianCategory};

const VETERINARIAN_COLUMNS: &str = "id, name, crmv, phone, email, category_id";

/// MySQL persistence for veterinarians
pub struct VeterinarianRepository {
    pool: MySqlPool,
}

impl VeterinarianRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Veterinarian>> {
        let veterinarian = sqlx::query_as::<_, Veterinarian>(&format!(
            "SELECT {} FROM veterinarians WHERE id = ?",
            VETERINARIAN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(veterinarian)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Veterinarian>> {
        let veterinarians = sqlx::query_as::<_, Veterinarian>(&format!(
            "SELECT {} FROM veterinarians ORDER BY name LIMIT ? OFFSET ?",
            VETERINARIAN_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(veterinarians)
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Veterinarian>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let veterinarians = sqlx::query_as::<_, Veterinarian>(&format!(
            "SELECT {} FROM veterinarians WHERE LOWER(name) LIKE ? ORDER BY name LIMIT ? OFFSET ?",
            VETERINARIAN_COLUMNS
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(veterinarians)
    }

    pub async fn insert(&self, veterinarian: &Veterinarian) -> Result<()> {
        sqlx::query(
            "INSERT INTO veterinarians (id, name, crmv, phone, email, category_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&veterinarian.id)
        .bind(&veterinarian.name)
        .bind(&veterinarian.crmv)
        .bind(&veterinarian.phone)
        .bind(&veterinarian.email)
        .bind(&veterinarian.category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, veterinarian: &Veterinarian) -> Result<()> {
        sqlx::query(
            "UPDATE veterinarians SET name = ?, crmv = ?, phone = ?, email = ?, \
             category_id = ? WHERE id = ?",
        )
        .bind(&veterinarian.name)
        .bind(&veterinarian.crmv)
        .bind(&veterinarian.phone)
        .bind(&veterinarian.email)
        .bind(&veterinarian.category_id)
        .bind(&veterinarian.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM veterinarians WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn exists_by_category(&self, category_id: &str) -> Result<bool> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM veterinarians WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}

/// MySQL persistence for veterinarian categories
pub struct VeterinarianCategoryRepository {
    pool: MySqlPool,
}

impl VeterinarianCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<VeterinarianCategory>> {
        let category = sqlx::query_as::<_, VeterinarianCategory>(
            "SELECT id, name FROM veterinarian_categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<VeterinarianCategory>> {
        let categories = sqlx::query_as::<_, VeterinarianCategory>(
            "SELECT id, name FROM veterinarian_categories ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn insert(&self, category: &VeterinarianCategory) -> Result<()> {
        sqlx::query("INSERT INTO veterinarian_categories (id, name) VALUES (?, ?)")
            .bind(&category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn update(&self, category: &VeterinarianCategory) -> Result<()> {
        sqlx::query("UPDATE veterinarian_categories SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM veterinarian_categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
