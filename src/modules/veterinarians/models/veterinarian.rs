use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A veterinarian available for medical appointments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Veterinarian {
    pub id: String,
    pub name: String,
    /// Regional veterinary council registration
    pub crmv: String,
    pub phone: String,
    pub email: String,
    pub category_id: String,
}

impl Veterinarian {
    pub fn new(
        name: String,
        crmv: String,
        phone: String,
        email: String,
        category_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            crmv,
            phone,
            email,
            category_id,
        }
    }
}

/// Specialty grouping for veterinarians
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VeterinarianCategory {
    pub id: String,
    pub name: String,
}

impl VeterinarianCategory {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}
