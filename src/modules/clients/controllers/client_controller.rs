use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::clients::services::{
    ClientService, CreateAddressInput, CreateClientInput, UpdateAddressInput, UpdateClientInput,
};

#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub complement: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub cpf: String,
    pub phone: Option<String>,
    pub address: CreateAddressRequest,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub complement: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<UpdateAddressRequest>,
}

#[derive(Debug, Deserialize)]
pub struct ClientListQuery {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /clients
pub async fn list_clients(
    query: web::Query<ClientListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ClientService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let clients = match &query.name {
        Some(name) => service.search_by_name(name, limit, offset).await?,
        None => service.list_clients(limit, offset).await?,
    };

    Ok(HttpResponse::Ok().json(clients))
}

/// GET /clients/{id}
pub async fn get_client(id: web::Path<String>, pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let service = ClientService::new(pool.get_ref().clone());
    let client = service.get_client(&id).await?;
    Ok(HttpResponse::Ok().json(client))
}

/// POST /clients
pub async fn create_client(
    request: web::Json<CreateClientRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ClientService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let client = service
        .create_client(CreateClientInput {
            name: request.name,
            cpf: request.cpf,
            phone: request.phone,
            address: CreateAddressInput {
                street: request.address.street,
                city: request.address.city,
                state: request.address.state,
                zip_code: request.address.zip_code,
                complement: request.address.complement,
            },
        })
        .await?;

    Ok(HttpResponse::Created().json(client))
}

/// PUT /clients/{id}
pub async fn update_client(
    id: web::Path<String>,
    request: web::Json<UpdateClientRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ClientService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let client = service
        .update_client(
            &id,
            UpdateClientInput {
                name: request.name,
                phone: request.phone,
                address: request.address.map(|address| UpdateAddressInput {
                    street: address.street,
                    city: address.city,
                    state: address.state,
                    zip_code: address.zip_code,
                    complement: address.complement,
                }),
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(client))
}

/// DELETE /clients/{id}
pub async fn delete_client(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = ClientService::new(pool.get_ref().clone());
    service.delete_client(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
