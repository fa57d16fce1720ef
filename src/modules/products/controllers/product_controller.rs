use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::products::services::{
    CreateProductInput, ProductCategoryService, ProductService, UpdateProductInput,
};

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity_in_stock: Option<i32>,
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryNameRequest {
    pub name: String,
}

/// GET /products
pub async fn list_products(
    query: web::Query<ProductListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let products = if let Some(name) = &query.name {
        service.search_by_name(name, limit, offset).await?
    } else if let Some(category_id) = &query.category_id {
        service.list_by_category(category_id, limit, offset).await?
    } else {
        service.list_products(limit, offset).await?
    };

    Ok(HttpResponse::Ok().json(products))
}

/// GET /products/{id}
pub async fn get_product(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductService::new(pool.get_ref().clone());
    let product = service.get_product(&id).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// POST /products
pub async fn create_product(
    request: web::Json<CreateProductRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let product = service
        .create_product(CreateProductInput {
            name: request.name,
            description: request.description,
            price: request.price,
            quantity_in_stock: request.quantity_in_stock,
            category_id: request.category_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(product))
}

/// PUT /products/{id}
pub async fn update_product(
    id: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let product = service
        .update_product(
            &id,
            UpdateProductInput {
                name: request.name,
                description: request.description,
                price: request.price,
                category_id: request.category_id,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// DELETE /products/{id}
pub async fn delete_product(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductService::new(pool.get_ref().clone());
    service.delete_product(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /product-categories
pub async fn list_product_categories(
    query: web::Query<NameQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductCategoryService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let categories = match &query.name {
        Some(name) => service.search_by_name(name, limit, offset).await?,
        None => service.list_categories(limit, offset).await?,
    };

    Ok(HttpResponse::Ok().json(categories))
}

/// GET /product-categories/{id}
pub async fn get_product_category(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductCategoryService::new(pool.get_ref().clone());
    let category = service.get_category(&id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// POST /product-categories
pub async fn create_product_category(
    request: web::Json<CategoryNameRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductCategoryService::new(pool.get_ref().clone());
    let category = service.create_category(request.into_inner().name).await?;
    Ok(HttpResponse::Created().json(category))
}

/// PUT /product-categories/{id}
pub async fn update_product_category(
    id: web::Path<String>,
    request: web::Json<CategoryNameRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductCategoryService::new(pool.get_ref().clone());
    let category = service
        .update_category(&id, request.into_inner().name)
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /product-categories/{id}
pub async fn delete_product_category(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ProductCategoryService::new(pool.get_ref().clone());
    service.delete_category(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
