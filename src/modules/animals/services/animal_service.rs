use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::core::{require, Result};
use crate::modules::animals::models::Animal;
use crate::modules::animals::repositories::AnimalRepository;
use crate::modules::clients::repositories::ClientRepository;

#[derive(Debug, Clone)]
pub struct CreateAnimalInput {
    pub client_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnimalInput {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Business logic for animal records
pub struct AnimalService {
    repository: AnimalRepository,
    clients: ClientRepository,
}

impl AnimalService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: AnimalRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn get_animal(&self, id: &str) -> Result<Animal> {
        require(self.repository.find_by_id(id).await?, "Animal", &id)
    }

    pub async fn list_animals(&self, limit: i64, offset: i64) -> Result<Vec<Animal>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Animal>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn search_by_species(
        &self,
        species: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Animal>> {
        self.repository.search_by_species(species, limit, offset).await
    }

    pub async fn create_animal(&self, input: CreateAnimalInput) -> Result<Animal> {
        require(
            self.clients.find_by_id(&input.client_id).await?,
            "Client",
            &input.client_id,
        )?;

        let animal = Animal::new(
            input.client_id,
            input.name,
            input.species,
            input.breed,
            input.birth_date,
        );
        self.repository.insert(&animal).await?;
        Ok(animal)
    }

    pub async fn update_animal(&self, id: &str, input: UpdateAnimalInput) -> Result<Animal> {
        let mut animal = self.get_animal(id).await?;

        if let Some(name) = input.name {
            animal.name = name;
        }
        if let Some(species) = input.species {
            animal.species = species;
        }
        if let Some(breed) = input.breed {
            animal.breed = Some(breed);
        }
        if let Some(birth_date) = input.birth_date {
            animal.birth_date = Some(birth_date);
        }

        self.repository.update(&animal).await?;
        Ok(animal)
    }

    pub async fn delete_animal(&self, id: &str) -> Result<()> {
        self.get_animal(id).await?;
        self.repository.delete(id).await
    }
}
