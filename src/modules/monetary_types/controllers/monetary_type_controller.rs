use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::monetary_types::services::MonetaryTypeService;

#[derive(Debug, Deserialize)]
pub struct CreateMonetaryTypeRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MonetaryTypeListQuery {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /monetary-types
pub async fn list_monetary_types(
    query: web::Query<MonetaryTypeListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = MonetaryTypeService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let monetary_types = match &query.name {
        Some(name) => service.search_by_name(name, limit, offset).await?,
        None => service.list_monetary_types(limit, offset).await?,
    };

    Ok(HttpResponse::Ok().json(monetary_types))
}

/// GET /monetary-types/{id}
pub async fn get_monetary_type(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = MonetaryTypeService::new(pool.get_ref().clone());
    let monetary_type = service.get_monetary_type(&id).await?;
    Ok(HttpResponse::Ok().json(monetary_type))
}

/// POST /monetary-types
pub async fn create_monetary_type(
    request: web::Json<CreateMonetaryTypeRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = MonetaryTypeService::new(pool.get_ref().clone());
    let monetary_type = service
        .create_monetary_type(request.into_inner().name)
        .await?;
    Ok(HttpResponse::Created().json(monetary_type))
}

/// DELETE /monetary-types/{id}
pub async fn delete_monetary_type(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = MonetaryTypeService::new(pool.get_ref().clone());
    service.delete_monetary_type(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
