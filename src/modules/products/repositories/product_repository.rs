use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::Result;
use crate::modules::products::models::{Product, ProductCategory};

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity_in_stock, category_id";

/// MySQL persistence for products
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lock-acquiring read; must run inside the transaction that will
    /// update the stock quantity
    pub async fn find_for_update(
        &self,
        tx: &mut Transaction<'_, MySql>,
        id: &str,
    ) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE id = ? FOR UPDATE",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(product)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products ORDER BY name LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Product>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE LOWER(name) LIKE ? ORDER BY name LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn find_by_category(
        &self,
        category_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM products WHERE category_id = ? ORDER BY name LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        ))
        .bind(category_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    pub async fn insert(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "INSERT INTO products (id, name, description, price, quantity_in_stock, category_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity_in_stock)
        .bind(&product.category_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, product: &Product) -> Result<()> {
        sqlx::query(
            "UPDATE products SET name = ?, description = ?, price = ?, quantity_in_stock = ?, \
             category_id = ? WHERE id = ?",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity_in_stock)
        .bind(&product.category_id)
        .bind(&product.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a locked product's new stock quantity inside its transaction
    pub async fn update_stock_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        product: &Product,
    ) -> Result<()> {
        sqlx::query("UPDATE products SET quantity_in_stock = ? WHERE id = ?")
            .bind(product.quantity_in_stock)
            .bind(&product.id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn exists_by_category(&self, category_id: &str) -> Result<bool> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE category_id = ?")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}

/// MySQL persistence for product categories
pub struct ProductCategoryRepository {
    pool: MySqlPool,
}

impl ProductCategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ProductCategory>> {
        let category = sqlx::query_as::<_, ProductCategory>(
            "SELECT id, name FROM product_categories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ProductCategory>> {
        let categories = sqlx::query_as::<_, ProductCategory>(
            "SELECT id, name FROM product_categories ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductCategory>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let categories = sqlx::query_as::<_, ProductCategory>(
            "SELECT id, name FROM product_categories WHERE LOWER(name) LIKE ? \
             ORDER BY name LIMIT ? OFFSET ?",
        )
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn insert(&self, category: &ProductCategory) -> Result<()> {
        sqlx::query("INSERT INTO product_categories (id, name) VALUES (?, ?)")
            .bind(&category.id)
            .bind(&category.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn update(&self, category: &ProductCategory) -> Result<()> {
        sqlx::query("UPDATE product_categories SET name = ? WHERE id = ?")
            .bind(&category.name)
            .bind(&category.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM product_categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
