use actix_web::{web, HttpResponse};
use chrono::NaiveDateTime;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::appointments::models::AppointmentStatus;
use crate::modules::appointments::services::{
    AppointmentService, CreateAppointmentInput, UpdateAppointmentInput,
};

#[derive(Debug, Deserialize)]
pub struct CreateAppointmentRequest {
    pub client_id: String,
    pub animal_id: String,
    pub veterinarian_id: String,
    pub appointment_start_time: NaiveDateTime,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub client_id: Option<String>,
    pub animal_id: Option<String>,
    pub veterinarian_id: Option<String>,
    pub appointment_start_time: Option<NaiveDateTime>,
    pub duration_minutes: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    pub veterinarian_name: Option<String>,
    pub client_name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /appointments
pub async fn list_appointments(
    query: web::Query<AppointmentListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AppointmentService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let appointments = if let Some(name) = &query.veterinarian_name {
        service.search_by_veterinarian_name(name, limit, offset).await?
    } else if let Some(name) = &query.client_name {
        service.search_by_client_name(name, limit, offset).await?
    } else {
        service.list_appointments(limit, offset).await?
    };

    Ok(HttpResponse::Ok().json(appointments))
}

/// GET /appointments/{id}
pub async fn get_appointment(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AppointmentService::new(pool.get_ref().clone());
    let appointment = service.get_appointment(&id).await?;
    Ok(HttpResponse::Ok().json(appointment))
}

/// POST /appointments
pub async fn create_appointment(
    request: web::Json<CreateAppointmentRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AppointmentService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let appointment = service
        .create_appointment(CreateAppointmentInput {
            client_id: request.client_id,
            animal_id: request.animal_id,
            veterinarian_id: request.veterinarian_id,
            appointment_start_time: request.appointment_start_time,
            duration_minutes: request.duration_minutes,
            notes: request.notes,
        })
        .await?;

    Ok(HttpResponse::Created().json(appointment))
}

/// PUT /appointments/{id}
pub async fn update_appointment(
    id: web::Path<String>,
    request: web::Json<UpdateAppointmentRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AppointmentService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let appointment = service
        .update_appointment(
            &id,
            UpdateAppointmentInput {
                client_id: request.client_id,
                animal_id: request.animal_id,
                veterinarian_id: request.veterinarian_id,
                appointment_start_time: request.appointment_start_time,
                duration_minutes: request.duration_minutes,
                status: request.status,
                diagnosis: request.diagnosis,
                treatment: request.treatment,
                notes: request.notes,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(appointment))
}

/// DELETE /appointments/{id}
pub async fn delete_appointment(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = AppointmentService::new(pool.get_ref().clone());
    service.delete_appointment(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
