use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::Result;
use crate::modules::stock::models::StockMovement;

const MOVEMENT_COLUMNS: &str =
    "id, product_id, movement_type, quantity, date_movement, description, price, sale_id, invoice";

/// MySQL persistence for the append-only stock movement log
pub struct StockMovementRepository {
    pool: MySqlPool,
}

impl StockMovementRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        movement: &StockMovement,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO stock_movements (id, product_id, movement_type, quantity, \
             date_movement, description, price, sale_id, invoice) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&movement.id)
        .bind(&movement.product_id)
        .bind(movement.movement_type.as_str())
        .bind(movement.quantity)
        .bind(movement.date_movement)
        .bind(&movement.description)
        .bind(movement.price)
        .bind(&movement.sale_id)
        .bind(&movement.invoice)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StockMovement>> {
        let movements = sqlx::query_as::<_, StockMovement>(&format!(
            "SELECT {} FROM stock_movements ORDER BY date_movement DESC LIMIT ? OFFSET ?",
            MOVEMENT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(movements)
    }

    pub async fn list_by_product(
        &self,
        product_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StockMovement>> {
        let movements = sqlx::query_as::<_, StockMovement>(&format!(
            "SELECT {} FROM stock_movements WHERE product_id = ? \
             ORDER BY date_movement DESC LIMIT ? OFFSET ?",
            MOVEMENT_COLUMNS
        ))
        .bind(product_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(movements)
    }
}
