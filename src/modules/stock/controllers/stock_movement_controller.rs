use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::stock::services::{RegisterMovementInput, StockMovementService};

#[derive(Debug, Deserialize)]
pub struct RegisterMovementRequest {
    pub product_id: String,
    pub quantity: i32,
    pub description: Option<String>,
    pub invoice: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct MovementListQuery {
    pub product_id: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl RegisterMovementRequest {
    fn into_input(self) -> RegisterMovementInput {
        RegisterMovementInput {
            product_id: self.product_id,
            quantity: self.quantity,
            description: self.description,
            invoice: self.invoice,
            price: self.price,
        }
    }
}

/// POST /stock-movements/input
pub async fn register_stock_input(
    request: web::Json<RegisterMovementRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = StockMovementService::new(pool.get_ref().clone());
    let movement = service.register_input(request.into_inner().into_input()).await?;
    Ok(HttpResponse::Created().json(movement))
}

/// POST /stock-movements/output
pub async fn register_stock_output(
    request: web::Json<RegisterMovementRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = StockMovementService::new(pool.get_ref().clone());
    let movement = service.register_output(request.into_inner().into_input()).await?;
    Ok(HttpResponse::Created().json(movement))
}

/// GET /stock-movements
pub async fn list_stock_movements(
    query: web::Query<MovementListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = StockMovementService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let movements = match &query.product_id {
        Some(product_id) => service.list_by_product(product_id, limit, offset).await?,
        None => service.list_movements(limit, offset).await?,
    };

    Ok(HttpResponse::Ok().json(movements))
}
