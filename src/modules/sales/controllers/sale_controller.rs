use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::sales::models::SalePaymentType;
use crate::modules::sales::services::{CreateSaleInput, CreateSaleItemInput, SaleService};

#[derive(Debug, Deserialize)]
pub struct CreateSaleItemRequest {
    pub product_id: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub client_id: String,
    pub product_sales: Vec<CreateSaleItemRequest>,
    pub payment_type: SalePaymentType,
    pub installments: Option<i32>,
    pub interval_days: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaleListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /sales
pub async fn list_sales(
    query: web::Query<SaleListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = SaleService::new(pool.get_ref().clone());
    let sales = service
        .list_sales(query.limit.unwrap_or(50), query.offset.unwrap_or(0))
        .await?;
    Ok(HttpResponse::Ok().json(sales))
}

/// GET /sales/{id}
pub async fn get_sale(id: web::Path<String>, pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let service = SaleService::new(pool.get_ref().clone());
    let sale = service.get_sale(&id).await?;
    Ok(HttpResponse::Ok().json(sale))
}

/// POST /sales
pub async fn create_sale(
    request: web::Json<CreateSaleRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = SaleService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let sale = service
        .create_sale(CreateSaleInput {
            client_id: request.client_id,
            items: request
                .product_sales
                .into_iter()
                .map(|item| CreateSaleItemInput {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            payment_type: request.payment_type,
            installments: request.installments,
            interval_days: request.interval_days,
            notes: request.notes,
        })
        .await?;

    Ok(HttpResponse::Created().json(sale))
}

/// POST /sales/{id}/cancel
pub async fn cancel_sale(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = SaleService::new(pool.get_ref().clone());
    let sale = service.cancel_sale(&id).await?;
    Ok(HttpResponse::Ok().json(sale))
}
