use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, Result};

/// A sellable product with an on-hand stock quantity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity_in_stock: i32,
    pub category_id: String,
}

impl Product {
    pub fn new(
        name: String,
        description: Option<String>,
        price: Decimal,
        quantity_in_stock: i32,
        category_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price,
            quantity_in_stock,
            category_id,
        }
    }

    /// Remove `quantity` units from stock.
    ///
    /// The caller must hold an exclusive row lock on this product for the
    /// read-check-write to be race free.
    pub fn debit_stock(&mut self, quantity: i32) -> Result<()> {
        if self.quantity_in_stock < quantity {
            return Err(AppError::InsufficientStock {
                product: self.name.clone(),
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }

        self.quantity_in_stock -= quantity;
        Ok(())
    }

    /// Return `quantity` units to stock; crediting has no upper bound
    pub fn credit_stock(&mut self, quantity: i32) {
        self.quantity_in_stock += quantity;
    }
}

/// Grouping for products
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
}

impl ProductCategory {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(stock: i32) -> Product {
        Product::new(
            "Dog Food 10kg".to_string(),
            None,
            dec!(45.90),
            stock,
            "cat-1".to_string(),
        )
    }

    #[test]
    fn debit_reduces_stock() {
        let mut product = product(10);
        product.debit_stock(4).unwrap();
        assert_eq!(product.quantity_in_stock, 6);
    }

    #[test]
    fn debit_below_zero_is_rejected_with_quantities() {
        let mut product = product(2);
        let err = product.debit_stock(5).unwrap_err();

        match err {
            AppError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // The guard runs before any mutation
        assert_eq!(product.quantity_in_stock, 2);
    }

    #[test]
    fn debit_to_exactly_zero_is_allowed() {
        let mut product = product(5);
        product.debit_stock(5).unwrap();
        assert_eq!(product.quantity_in_stock, 0);
    }

    #[test]
    fn credit_increases_stock() {
        let mut product = product(0);
        product.credit_stock(7);
        assert_eq!(product.quantity_in_stock, 7);
    }
}
