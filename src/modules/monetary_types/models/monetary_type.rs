use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment method classification (cash, PIX, card, ...), referenced by
/// financial payments but never interpreted by the ledger
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonetaryType {
    pub id: String,
    pub name: String,
}

impl MonetaryType {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}
