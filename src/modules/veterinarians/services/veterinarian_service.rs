use sqlx::MySqlPool;

use crate::core::{require, AppError, Result};
use crate::modules::appointments::repositories::AppointmentRepository;
use crate::modules::veterinarians::models::{Veterinarian, VeterinarianCategory};
use crate::modules::veterinarians::repositories::{
    VeterinarianCategoryRepository, VeterinarianRepository,
};

#[derive(Debug, Clone)]
pub struct CreateVeterinarianInput {
    pub name: String,
    pub crmv: String,
    pub phone: String,
    pub email: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVeterinarianInput {
    pub name: Option<String>,
    pub crmv: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category_id: Option<String>,
}

/// Business logic for veterinarians
pub struct VeterinarianService {
    repository: VeterinarianRepository,
    categories: VeterinarianCategoryRepository,
    appointments: AppointmentRepository,
}

impl VeterinarianService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: VeterinarianRepository::new(pool.clone()),
            categories: VeterinarianCategoryRepository::new(pool.clone()),
            appointments: AppointmentRepository::new(pool),
        }
    }

    pub async fn get_veterinarian(&self, id: &str) -> Result<Veterinarian> {
        require(self.repository.find_by_id(id).await?, "Veterinarian", &id)
    }

    pub async fn list_veterinarians(&self, limit: i64, offset: i64) -> Result<Vec<Veterinarian>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Veterinarian>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn create_veterinarian(
        &self,
        input: CreateVeterinarianInput,
    ) -> Result<Veterinarian> {
        require(
            self.categories.find_by_id(&input.category_id).await?,
            "Veterinarian Category",
            &input.category_id,
        )?;

        let veterinarian = Veterinarian::new(
            input.name,
            input.crmv,
            input.phone,
            input.email,
            input.category_id,
        );
        self.repository.insert(&veterinarian).await?;
        Ok(veterinarian)
    }

    pub async fn update_veterinarian(
        &self,
        id: &str,
        input: UpdateVeterinarianInput,
    ) -> Result<Veterinarian> {
        let mut veterinarian = self.get_veterinarian(id).await?;

        if let Some(name) = input.name {
            veterinarian.name = name;
        }
        if let Some(crmv) = input.crmv {
            veterinarian.crmv = crmv;
        }
        if let Some(phone) = input.phone {
            veterinarian.phone = phone;
        }
        if let Some(email) = input.email {
            veterinarian.email = email;
        }
        if let Some(category_id) = input.category_id {
            require(
                self.categories.find_by_id(&category_id).await?,
                "Veterinarian Category",
                &category_id,
            )?;
            veterinarian.category_id = category_id;
        }

        self.repository.update(&veterinarian).await?;
        Ok(veterinarian)
    }

    pub async fn delete_veterinarian(&self, id: &str) -> Result<()> {
        self.get_veterinarian(id).await?;

        if self.appointments.exists_by_veterinarian(id).await? {
            return Err(AppError::business(
                "Cannot delete veterinarian with scheduled medical appointments.",
            ));
        }

        self.repository.delete(id).await
    }
}

/// Business logic for veterinarian categories
pub struct VeterinarianCategoryService {
    repository: VeterinarianCategoryRepository,
    veterinarians: VeterinarianRepository,
}

impl VeterinarianCategoryService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: VeterinarianCategoryRepository::new(pool.clone()),
            veterinarians: VeterinarianRepository::new(pool),
        }
    }

    pub async fn get_category(&self, id: &str) -> Result<VeterinarianCategory> {
        require(
            self.repository.find_by_id(id).await?,
            "Veterinarian Category",
            &id,
        )
    }

    pub async fn list_categories(&self, limit: i64, offset: i64) -> Result<Vec<VeterinarianCategory>> {
        self.repository.list(limit, offset).await
    }

    pub async fn create_category(&self, name: String) -> Result<VeterinarianCategory> {
        let category = VeterinarianCategory::new(name);
        self.repository.insert(&category).await?;
        Ok(category)
    }

    pub async fn update_category(&self, id: &str, name: String) -> Result<VeterinarianCategory> {
        let mut category = self.get_category(id).await?;
        category.name = name;
        self.repository.update(&category).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.get_category(id).await?;

        if self.veterinarians.exists_by_category(id).await? {
            return Err(AppError::business(
                "Cannot delete this category because it is being used by veterinarians",
            ));
        }

        self.repository.delete(id).await
    }
}
