use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A customer; owns one address and any number of animals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub phone: Option<String>,
    /// Owned address; loaded separately from `addresses`
    #[sqlx(skip)]
    #[serde(default)]
    pub address: Option<Address>,
}

impl Client {
    pub fn new(name: String, cpf: String, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            cpf,
            phone,
            address: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: String,
    pub client_id: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

impl Address {
    pub fn new(
        client_id: String,
        street: String,
        city: String,
        state: String,
        zip_code: String,
        complement: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id,
            street,
            city,
            state,
            zip_code,
            complement,
        }
    }
}
