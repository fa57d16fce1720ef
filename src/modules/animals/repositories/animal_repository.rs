use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::animals::models::Animal;

const ANIMAL_COLUMNS: &str = "id, client_id, name, species, breed, birth_date";

/// MySQL persistence for animals
pub struct AnimalRepository {
    pool: MySqlPool,
}

impl AnimalRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Animal>> {
        let animal = sqlx::query_as::<_, Animal>(&format!(
            "SELECT {} FROM animals WHERE id = ?",
            ANIMAL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(animal)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Animal>> {
        let animals = sqlx::query_as::<_, Animal>(&format!(
            "SELECT {} FROM animals ORDER BY name LIMIT ? OFFSET ?",
            ANIMAL_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(animals)
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Animal>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let animals = sqlx::query_as::<_, Animal>(&format!(
            "SELECT {} FROM animals WHERE LOWER(name) LIKE ? ORDER BY name LIMIT ? OFFSET ?",
            ANIMAL_COLUMNS
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(animals)
    }

    pub async fn search_by_species(
        &self,
        species: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Animal>> {
        let pattern = format!("%{}%", species.to_lowercase());
        let animals = sqlx::query_as::<_, Animal>(&format!(
            "SELECT {} FROM animals WHERE LOWER(species) LIKE ? ORDER BY name LIMIT ? OFFSET ?",
            ANIMAL_COLUMNS
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(animals)
    }

    pub async fn insert(&self, animal: &Animal) -> Result<()> {
        sqlx::query(
            "INSERT INTO animals (id, client_id, name, species, breed, birth_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&animal.id)
        .bind(&animal.client_id)
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(&animal.breed)
        .bind(animal.birth_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, animal: &Animal) -> Result<()> {
        sqlx::query(
            "UPDATE animals SET name = ?, species = ?, breed = ?, birth_date = ? WHERE id = ?",
        )
        .bind(&animal.name)
        .bind(&animal.species)
        .bind(&animal.breed)
        .bind(animal.birth_date)
        .bind(&animal.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM animals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
