use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{require, AppError, Result};
use crate::modules::products::models::{Product, ProductCategory};
use crate::modules::products::repositories::{ProductCategoryRepository, ProductRepository};
use crate::modules::sales::repositories::SaleRepository;

#[derive(Debug, Clone)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity_in_stock: Option<i32>,
    pub category_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
}

/// Business logic for the product catalog
pub struct ProductService {
    repository: ProductRepository,
    categories: ProductCategoryRepository,
    sales: SaleRepository,
}

impl ProductService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ProductRepository::new(pool.clone()),
            categories: ProductCategoryRepository::new(pool.clone()),
            sales: SaleRepository::new(pool),
        }
    }

    pub async fn get_product(&self, id: &str) -> Result<Product> {
        require(self.repository.find_by_id(id).await?, "Product", &id)
    }

    pub async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(&self, name: &str, limit: i64, offset: i64) -> Result<Vec<Product>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn list_by_category(
        &self,
        category_id: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>> {
        require(
            self.categories.find_by_id(category_id).await?,
            "Product Category",
            &category_id,
        )?;
        self.repository
            .find_by_category(category_id, limit, offset)
            .await
    }

    pub async fn create_product(&self, input: CreateProductInput) -> Result<Product> {
        if input.price <= Decimal::ZERO {
            return Err(AppError::validation("The price needs to be positive"));
        }
        let quantity = input.quantity_in_stock.unwrap_or(0);
        if quantity < 0 {
            return Err(AppError::validation("The stock quantity cannot be negative"));
        }
        require(
            self.categories.find_by_id(&input.category_id).await?,
            "Product Category",
            &input.category_id,
        )?;

        let product = Product::new(
            input.name,
            input.description,
            input.price,
            quantity,
            input.category_id,
        );
        self.repository.insert(&product).await?;
        Ok(product)
    }

    pub async fn update_product(&self, id: &str, input: UpdateProductInput) -> Result<Product> {
        let mut product = self.get_product(id).await?;

        if let Some(name) = input.name {
            product.name = name;
        }
        if let Some(description) = input.description {
            product.description = Some(description);
        }
        if let Some(price) = input.price {
            if price <= Decimal::ZERO {
                return Err(AppError::validation("The price needs to be positive"));
            }
            product.price = price;
        }
        if let Some(category_id) = input.category_id {
            require(
                self.categories.find_by_id(&category_id).await?,
                "Product Category",
                &category_id,
            )?;
            product.category_id = category_id;
        }

        self.repository.update(&product).await?;
        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<()> {
        self.get_product(id).await?;

        if self.sales.exists_item_with_product(id).await? {
            return Err(AppError::business(
                "Cannot delete this product because it is being used in sales",
            ));
        }

        self.repository.delete(id).await
    }
}

/// Business logic for product categories
pub struct ProductCategoryService {
    repository: ProductCategoryRepository,
    products: ProductRepository,
}

impl ProductCategoryService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: ProductCategoryRepository::new(pool.clone()),
            products: ProductRepository::new(pool),
        }
    }

    pub async fn get_category(&self, id: &str) -> Result<ProductCategory> {
        require(self.repository.find_by_id(id).await?, "Product Category", &id)
    }

    pub async fn list_categories(&self, limit: i64, offset: i64) -> Result<Vec<ProductCategory>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductCategory>> {
        self.repository.search_by_name(name, limit, offset).await
    }

    pub async fn create_category(&self, name: String) -> Result<ProductCategory> {
        let category = ProductCategory::new(name);
        self.repository.insert(&category).await?;
        Ok(category)
    }

    pub async fn update_category(&self, id: &str, name: String) -> Result<ProductCategory> {
        let mut category = self.get_category(id).await?;
        category.name = name;
        self.repository.update(&category).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.get_category(id).await?;

        if self.products.exists_by_category(id).await? {
            return Err(AppError::business(
                "Cannot delete this category because it is being used by products",
            ));
        }

        self.repository.delete(id).await
    }
}
