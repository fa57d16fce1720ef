use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::info;

use crate::core::{require, AppError, Result};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::stock::models::{MovementType, StockMovement};
use crate::modules::stock::repositories::StockMovementRepository;

/// Parameters for a manually registered movement
#[derive(Debug, Clone)]
pub struct RegisterMovementInput {
    pub product_id: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub invoice: Option<String>,
    pub price: Option<Decimal>,
}

/// Stock quantity bookkeeping.
///
/// Every debit/credit locks the product row (`SELECT ... FOR UPDATE`) before
/// the read-check-write on `quantity_in_stock`, so concurrent sales cannot
/// lose updates, and records an audit movement in the same transaction.
pub struct StockMovementService {
    pool: MySqlPool,
    repository: StockMovementRepository,
    products: ProductRepository,
}

impl StockMovementService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: StockMovementRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list_movements(&self, limit: i64, offset: i64) -> Result<Vec<StockMovement>> {
        self.repository.list(limit, offset).await
    }

    pub async fn list_by_product(
        &self,
        product_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StockMovement>> {
        self.repository
            .list_by_product(product_id, limit, offset)
            .await
    }

    /// Credit stock from a standalone request (goods received)
    pub async fn register_input(&self, input: RegisterMovementInput) -> Result<StockMovement> {
        let mut tx = self.pool.begin().await?;
        let movement = self
            .register_input_tx(
                &mut tx,
                &input.product_id,
                input.quantity,
                input.description,
                input.invoice,
                input.price,
                None,
            )
            .await?;
        tx.commit().await?;
        Ok(movement)
    }

    /// Debit stock from a standalone request (loss, breakage, manual output)
    pub async fn register_output(&self, input: RegisterMovementInput) -> Result<StockMovement> {
        let mut tx = self.pool.begin().await?;
        let movement = self
            .register_output_tx(
                &mut tx,
                &input.product_id,
                input.quantity,
                input.description,
                input.price,
                None,
            )
            .await?;
        tx.commit().await?;
        Ok(movement)
    }

    /// Credit stock inside an ambient transaction
    pub async fn register_input_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        product_id: &str,
        quantity: i32,
        description: Option<String>,
        invoice: Option<String>,
        price: Option<Decimal>,
        sale_id: Option<String>,
    ) -> Result<StockMovement> {
        Self::validate_quantity(quantity)?;

        let mut product = require(
            self.products.find_for_update(tx, product_id).await?,
            "Product",
            &product_id,
        )?;

        product.credit_stock(quantity);
        self.products.update_stock_tx(tx, &product).await?;

        let movement = StockMovement::new(
            product.id.clone(),
            MovementType::Input,
            quantity,
            description,
            price,
            sale_id,
            invoice,
            None,
        );
        self.repository.insert_tx(tx, &movement).await?;

        info!(
            product_id,
            quantity,
            new_stock = product.quantity_in_stock,
            "Registered stock input"
        );
        Ok(movement)
    }

    /// Debit stock inside an ambient transaction; fails before any write when
    /// the product cannot cover the quantity
    pub async fn register_output_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        product_id: &str,
        quantity: i32,
        description: Option<String>,
        price: Option<Decimal>,
        sale_id: Option<String>,
    ) -> Result<StockMovement> {
        Self::validate_quantity(quantity)?;

        let mut product = require(
            self.products.find_for_update(tx, product_id).await?,
            "Product",
            &product_id,
        )?;

        product.debit_stock(quantity)?;
        self.products.update_stock_tx(tx, &product).await?;

        let movement = StockMovement::new(
            product.id.clone(),
            MovementType::Output,
            quantity,
            description,
            price,
            sale_id,
            None,
            None,
        );
        self.repository.insert_tx(tx, &movement).await?;

        info!(
            product_id,
            quantity,
            new_stock = product.quantity_in_stock,
            "Registered stock output"
        );
        Ok(movement)
    }

    fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity <= 0 {
            return Err(AppError::validation("The quantity needs to be positive"));
        }
        Ok(())
    }
}
