use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::veterinarians::services::{
    CreateVeterinarianInput, UpdateVeterinarianInput, VeterinarianCategoryService,
    VeterinarianService,
};

#[derive(Debug, Deserialize)]
pub struct CreateVeterinarianRequest {
    pub name: String,
    pub crmv: String,
    pub phone: String,
    pub email: String,
    pub category_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVeterinarianRequest {
    pub name: Option<String>,
    pub crmv: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VeterinarianListQuery {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryNameRequest {
    pub name: String,
}

/// GET /veterinarians
pub async fn list_veterinarians(
    query: web::Query<VeterinarianListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let veterinarians = match &query.name {
        Some(name) => service.search_by_name(name, limit, offset).await?,
        None => service.list_veterinarians(limit, offset).await?,
    };

    Ok(HttpResponse::Ok().json(veterinarians))
}

/// GET /veterinarians/{id}
pub async fn get_veterinarian(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianService::new(pool.get_ref().clone());
    let veterinarian = service.get_veterinarian(&id).await?;
    Ok(HttpResponse::Ok().json(veterinarian))
}

/// POST /veterinarians
pub async fn create_veterinarian(
    request: web::Json<CreateVeterinarianRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let veterinarian = service
        .create_veterinarian(CreateVeterinarianInput {
            name: request.name,
            crmv: request.crmv,
            phone: request.phone,
            email: request.email,
            category_id: request.category_id,
        })
        .await?;

    Ok(HttpResponse::Created().json(veterinarian))
}

/// PUT /veterinarians/{id}
pub async fn update_veterinarian(
    id: web::Path<String>,
    request: web::Json<UpdateVeterinarianRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let veterinarian = service
        .update_veterinarian(
            &id,
            UpdateVeterinarianInput {
                name: request.name,
                crmv: request.crmv,
                phone: request.phone,
                email: request.email,
                category_id: request.category_id,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(veterinarian))
}

/// DELETE /veterinarians/{id}
pub async fn delete_veterinarian(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianService::new(pool.get_ref().clone());
    service.delete_veterinarian(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /veterinarian-categories
pub async fn list_veterinarian_categories(
    query: web::Query<VeterinarianListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianCategoryService::new(pool.get_ref().clone());
    let categories = service
        .list_categories(query.limit.unwrap_or(50), query.offset.unwrap_or(0))
        .await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /veterinarian-categories/{id}
pub async fn get_veterinarian_category(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianCategoryService::new(pool.get_ref().clone());
    let category = service.get_category(&id).await?;
    Ok(HttpResponse::Ok().json(category))
}

/// POST /veterinarian-categories
pub async fn create_veterinarian_category(
    request: web::Json<CategoryNameRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianCategoryService::new(pool.get_ref().clone());
    let category = service.create_category(request.into_inner().name).await?;
    Ok(HttpResponse::Created().json(category))
}

/// PUT /veterinarian-categories/{id}
pub async fn update_veterinarian_category(
    id: web::Path<String>,
    request: web::Json<CategoryNameRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianCategoryService::new(pool.get_ref().clone());
    let category = service
        .update_category(&id, request.into_inner().name)
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

/// DELETE /veterinarian-categories/{id}
pub async fn delete_veterinarian_category(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = VeterinarianCategoryService::new(pool.get_ref().clone());
    service.delete_category(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
