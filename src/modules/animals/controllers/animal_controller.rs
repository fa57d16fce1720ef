use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::animals::services::{AnimalService, CreateAnimalInput, UpdateAnimalInput};

#[derive(Debug, Deserialize)]
pub struct CreateAnimalRequest {
    pub client_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAnimalRequest {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AnimalListQuery {
    pub name: Option<String>,
    pub species: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /animals
pub async fn list_animals(
    query: web::Query<AnimalListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AnimalService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let animals = if let Some(name) = &query.name {
        service.search_by_name(name, limit, offset).await?
    } else if let Some(species) = &query.species {
        service.search_by_species(species, limit, offset).await?
    } else {
        service.list_animals(limit, offset).await?
    };

    Ok(HttpResponse::Ok().json(animals))
}

/// GET /animals/{id}
pub async fn get_animal(id: web::Path<String>, pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let service = AnimalService::new(pool.get_ref().clone());
    let animal = service.get_animal(&id).await?;
    Ok(HttpResponse::Ok().json(animal))
}

/// POST /animals
pub async fn create_animal(
    request: web::Json<CreateAnimalRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AnimalService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let animal = service
        .create_animal(CreateAnimalInput {
            client_id: request.client_id,
            name: request.name,
            species: request.species,
            breed: request.breed,
            birth_date: request.birth_date,
        })
        .await?;

    Ok(HttpResponse::Created().json(animal))
}

/// PUT /animals/{id}
pub async fn update_animal(
    id: web::Path<String>,
    request: web::Json<UpdateAnimalRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AnimalService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let animal = service
        .update_animal(
            &id,
            UpdateAnimalInput {
                name: request.name,
                species: request.species,
                breed: request.breed,
                birth_date: request.birth_date,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(animal))
}

/// DELETE /animals/{id}
pub async fn delete_animal(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AnimalService::new(pool.get_ref().clone());
    service.delete_animal(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
