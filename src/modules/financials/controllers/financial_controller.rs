use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::financials::models::{Financial, FinancialPayment};
use crate::modules::financials::services::{
    CreateFinancialInput, FinancialService, PayFinancialInput,
};

#[derive(Debug, Deserialize)]
pub struct CreateFinancialRequest {
    pub description: String,
    pub amount: Decimal,
    #[serde(default = "default_installments")]
    pub installments: i32,
    #[serde(default)]
    pub interval_days: i32,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_paid: bool,
    pub client_id: String,
    pub sale_id: Option<String>,
    pub notes: Option<String>,
}

fn default_installments() -> i32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct PayFinancialRequest {
    pub paid_amount: Decimal,
    pub payment_date: NaiveDate,
    pub monetary_type_id: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FinancialListQuery {
    pub client_name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FinancialPaymentResponse {
    pub id: String,
    pub paid_amount: Decimal,
    pub payment_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monetary_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FinancialResponse {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub balance: Decimal,
    pub date_created: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    pub is_paid: bool,
    pub installment_number: i32,
    pub total_installments: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monetary_type_id: Option<String>,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_id: Option<String>,
    pub payments: Vec<FinancialPaymentResponse>,
}

impl From<FinancialPayment> for FinancialPaymentResponse {
    fn from(payment: FinancialPayment) -> Self {
        Self {
            id: payment.id,
            paid_amount: payment.paid_amount,
            payment_date: payment.payment_date,
            monetary_type_id: payment.monetary_type_id,
            notes: payment.notes,
        }
    }
}

impl From<Financial> for FinancialResponse {
    fn from(financial: Financial) -> Self {
        Self {
            id: financial.id,
            description: financial.description,
            amount: financial.amount,
            balance: financial.balance,
            date_created: financial.date_created,
            due_date: financial.due_date,
            payment_date: financial.payment_date,
            is_paid: financial.is_paid,
            installment_number: financial.installment_number,
            total_installments: financial.total_installments,
            notes: financial.notes,
            monetary_type_id: financial.monetary_type_id,
            client_id: financial.client_id,
            sale_id: financial.sale_id,
            payments: financial
                .payments
                .into_iter()
                .map(FinancialPaymentResponse::from)
                .collect(),
        }
    }
}

/// GET /financials
pub async fn list_financials(
    query: web::Query<FinancialListQuery>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    let limit = query.limit.unwrap_or(50);
    let offset = query.offset.unwrap_or(0);

    let financials = match &query.client_name {
        Some(name) => service.search_by_client_name(name, limit, offset).await?,
        None => service.list_financials(limit, offset).await?,
    };

    let response: Vec<FinancialResponse> =
        financials.into_iter().map(FinancialResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /financials/{id}
pub async fn get_financial(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    let financial = service.get_financial(&id).await?;
    Ok(HttpResponse::Ok().json(FinancialResponse::from(financial)))
}

/// POST /financials
pub async fn create_financial(
    request: web::Json<CreateFinancialRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let financials = service
        .create_manual(CreateFinancialInput {
            client_id: request.client_id,
            sale_id: request.sale_id,
            description: request.description,
            amount: request.amount,
            installments: request.installments,
            interval_days: request.interval_days,
            due_date: request.due_date,
            is_paid: request.is_paid,
            notes: request.notes,
        })
        .await?;

    let response: Vec<FinancialResponse> =
        financials.into_iter().map(FinancialResponse::from).collect();
    Ok(HttpResponse::Created().json(response))
}

/// POST /financials/{id}/payments
pub async fn pay_financial(
    id: web::Path<String>,
    request: web::Json<PayFinancialRequest>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    let request = request.into_inner();

    let financial = service
        .pay_financial(
            &id,
            PayFinancialInput {
                paid_amount: request.paid_amount,
                payment_date: request.payment_date,
                monetary_type_id: request.monetary_type_id,
                next_due_date: request.next_due_date,
                notes: request.notes,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(FinancialResponse::from(financial)))
}

/// POST /financials/payments/{payment_id}/refund
pub async fn refund_payment(
    payment_id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    let financial = service.refund_payment(&payment_id).await?;
    Ok(HttpResponse::Ok().json(FinancialResponse::from(financial)))
}

/// DELETE /financials/{id}
pub async fn delete_financial(
    id: web::Path<String>,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse> {
    let service = FinancialService::new(pool.get_ref().clone());
    service.delete_financial(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
