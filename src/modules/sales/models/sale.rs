use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Sale state; cancellation is irreversible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Completed,
    Canceled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for SaleStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "COMPLETED" => Ok(Self::Completed),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(format!("Invalid sale status: {}", value)),
        }
    }
}

/// How the sale is settled: all at once or as an installment series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalePaymentType {
    Cash,
    Installments,
}

impl SalePaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::Installments => "INSTALLMENTS",
        }
    }
}

impl std::fmt::Display for SalePaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for SalePaymentType {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "CASH" => Ok(Self::Cash),
            "INSTALLMENTS" => Ok(Self::Installments),
            _ => Err(format!("Invalid sale payment type: {}", value)),
        }
    }
}

/// A completed or canceled transaction
///
/// `total_value` is fixed at creation from the line items; the financial
/// obligations generated from it live in the financials module and reference
/// the sale by id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: String,
    pub client_id: String,
    #[sqlx(try_from = "String")]
    pub status: SaleStatus,
    #[sqlx(try_from = "String")]
    pub payment_type: SalePaymentType,
    pub total_value: Decimal,
    pub notes: Option<String>,
    pub date_created: NaiveDateTime,
    /// Owned line items; loaded separately from `product_sales`
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<ProductSale>,
}

impl Sale {
    pub fn new(client_id: String, payment_type: SalePaymentType, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id,
            status: SaleStatus::Completed,
            payment_type,
            total_value: Decimal::ZERO,
            notes,
            date_created: Utc::now().naive_utc(),
            items: Vec::new(),
        }
    }
}

/// One line item of a sale; `unit_price` is the price charged, which may
/// differ from the product's current list price
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductSale {
    pub id: String,
    pub sale_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl ProductSale {
    pub fn new(sale_id: String, product_id: String, quantity: i32, unit_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sale_id,
            product_id,
            quantity,
            unit_price,
        }
    }
}
