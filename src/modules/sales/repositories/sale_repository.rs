use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::Result;
use crate::modules::sales::models::{ProductSale, Sale};

const SALE_COLUMNS: &str = "id, client_id, status, payment_type, total_value, notes, date_created";

/// MySQL persistence for sales and their line items
pub struct SaleRepository {
    pool: MySqlPool,
}

impl SaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load a sale together with its owned line items
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {} FROM sales WHERE id = ?",
            SALE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut sale) = sale else {
            return Ok(None);
        };

        sale.items = self.find_items(&sale.id).await?;
        Ok(Some(sale))
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {} FROM sales ORDER BY date_created DESC LIMIT ? OFFSET ?",
            SALE_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    pub async fn find_items(&self, sale_id: &str) -> Result<Vec<ProductSale>> {
        let items = sqlx::query_as::<_, ProductSale>(
            "SELECT id, sale_id, product_id, quantity, unit_price \
             FROM product_sales WHERE sale_id = ?",
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn insert_sale_tx(&self, tx: &mut Transaction<'_, MySql>, sale: &Sale) -> Result<()> {
        sqlx::query(
            "INSERT INTO sales (id, client_id, status, payment_type, total_value, notes, \
             date_created) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&sale.id)
        .bind(&sale.client_id)
        .bind(sale.status.as_str())
        .bind(sale.payment_type.as_str())
        .bind(sale.total_value)
        .bind(&sale.notes)
        .bind(sale.date_created)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn insert_items_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        items: &[ProductSale],
    ) -> Result<()> {
        for item in items {
            sqlx::query(
                "INSERT INTO product_sales (id, sale_id, product_id, quantity, unit_price) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&item.id)
            .bind(&item.sale_id)
            .bind(&item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    pub async fn update_status_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        sale: &Sale,
    ) -> Result<()> {
        sqlx::query("UPDATE sales SET status = ? WHERE id = ?")
            .bind(sale.status.as_str())
            .bind(&sale.id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub async fn exists_item_with_product(&self, product_id: &str) -> Result<bool> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product_sales WHERE product_id = ?")
                .bind(product_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}
