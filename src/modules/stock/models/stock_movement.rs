use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Direction of an inventory quantity change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Input,
    Output,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Output => "OUTPUT",
        }
    }
}

impl std::fmt::Display for MovementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for MovementType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "INPUT" => Ok(Self::Input),
            "OUTPUT" => Ok(Self::Output),
            _ => Err(format!("Invalid movement type: {}", value)),
        }
    }
}

/// Append-only audit record of one inventory quantity change
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    #[sqlx(try_from = "String")]
    pub movement_type: MovementType,
    pub quantity: i32,
    pub date_movement: NaiveDateTime,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub sale_id: Option<String>,
    pub invoice: Option<String>,
}

impl StockMovement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: String,
        movement_type: MovementType,
        quantity: i32,
        description: Option<String>,
        price: Option<Decimal>,
        sale_id: Option<String>,
        invoice: Option<String>,
        date_movement: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id,
            movement_type,
            quantity,
            date_movement: date_movement.unwrap_or_else(|| Utc::now().naive_utc()),
            description,
            price,
            sale_id,
            invoice,
        }
    }
}
