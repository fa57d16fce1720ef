use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A client's pet
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Animal {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl Animal {
    pub fn new(
        client_id: String,
        name: String,
        species: String,
        breed: Option<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id,
            name,
            species,
            breed,
            birth_date,
        }
    }
}
