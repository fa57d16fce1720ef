use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::MySqlPool;
use tracing::info;

use crate::core::{require, AppError, Result};
use crate::modules::clients::repositories::ClientRepository;
use crate::modules::financials::repositories::FinancialRepository;
use crate::modules::financials::services::FinancialService;
use crate::modules::sales::models::{ProductSale, Sale, SalePaymentType};
use crate::modules::sales::repositories::SaleRepository;
use crate::modules::sales::services::SaleLifecycle;
use crate::modules::stock::services::StockMovementService;

#[derive(Debug, Clone)]
pub struct CreateSaleItemInput {
    pub product_id: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct CreateSaleInput {
    pub client_id: String,
    pub items: Vec<CreateSaleItemInput>,
    pub payment_type: SalePaymentType,
    pub installments: Option<i32>,
    pub interval_days: Option<i32>,
    pub notes: Option<String>,
}

/// Orchestrates sale creation and cancellation: totals, stock movement,
/// and the financial series, all within one transaction per operation
pub struct SaleService {
    pool: MySqlPool,
    repository: SaleRepository,
    clients: ClientRepository,
    stock: StockMovementService,
    financials: FinancialService,
    financial_repository: FinancialRepository,
}

impl SaleService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: SaleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            stock: StockMovementService::new(pool.clone()),
            financials: FinancialService::new(pool.clone()),
            financial_repository: FinancialRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn get_sale(&self, id: &str) -> Result<Sale> {
        require(self.repository.find_by_id(id).await?, "Sale", &id)
    }

    pub async fn list_sales(&self, limit: i64, offset: i64) -> Result<Vec<Sale>> {
        self.repository.list(limit, offset).await
    }

    pub async fn create_sale(&self, input: CreateSaleInput) -> Result<Sale> {
        if input.items.is_empty() {
            return Err(AppError::validation("Product sales list is required"));
        }
        for item in &input.items {
            if item.quantity <= 0 {
                return Err(AppError::validation("The quantity needs to be positive"));
            }
            if item.price <= Decimal::ZERO {
                return Err(AppError::validation("The price needs to be positive"));
            }
        }

        let (installments, interval_days) = match input.payment_type {
            SalePaymentType::Cash => (1, 0),
            SalePaymentType::Installments => {
                let installments = input.installments.unwrap_or(1);
                if installments < 1 {
                    return Err(AppError::validation(
                        "The sale must have at least one installment.",
                    ));
                }
                let interval_days = input.interval_days.unwrap_or(0);
                if interval_days < 0 {
                    return Err(AppError::validation("The interval must be positive"));
                }
                (installments, interval_days)
            }
        };

        require(
            self.clients.find_by_id(&input.client_id).await?,
            "Client",
            &input.client_id,
        )?;

        let mut sale = Sale::new(input.client_id, input.payment_type, input.notes);
        let sale_id = sale.id.clone();
        sale.items = input
            .items
            .iter()
            .map(|item| {
                ProductSale::new(
                    sale_id.clone(),
                    item.product_id.clone(),
                    item.quantity,
                    item.price,
                )
            })
            .collect();
        sale.total_value = SaleLifecycle::calculate_total(&sale.items);

        let today = Utc::now().date_naive();
        let mut tx = self.pool.begin().await?;

        self.repository.insert_sale_tx(&mut tx, &sale).await?;

        // Debit stock per line item under a product row lock; any shortfall
        // aborts the whole sale
        for item in &sale.items {
            self.stock
                .register_output_tx(
                    &mut tx,
                    &item.product_id,
                    item.quantity,
                    Some(format!("SALE_ORDER_{}", sale.id)),
                    Some(item.unit_price),
                    Some(sale.id.clone()),
                )
                .await?;
        }

        self.repository.insert_items_tx(&mut tx, &sale.items).await?;

        self.financials
            .create_from_sale_tx(&mut tx, &sale, installments, interval_days, today)
            .await?;

        tx.commit().await?;

        info!(
            sale_id = %sale.id,
            total = %sale.total_value,
            payment_type = %sale.payment_type,
            "Created sale"
        );
        Ok(sale)
    }

    /// Cancel a sale: guards first, then status flip, stock reversal, and
    /// deletion of the generated financial records
    pub async fn cancel_sale(&self, id: &str) -> Result<Sale> {
        let mut sale = self.get_sale(id).await?;
        let mut financials = self.financial_repository.find_by_sale(id).await?;

        SaleLifecycle::cancel(&mut sale, &mut financials)?;

        let mut tx = self.pool.begin().await?;

        self.repository.update_status_tx(&mut tx, &sale).await?;

        for item in &sale.items {
            self.stock
                .register_input_tx(
                    &mut tx,
                    &item.product_id,
                    item.quantity,
                    Some(format!("CANCELLATION_OF_SALE_ORDER_{}", sale.id)),
                    None,
                    None,
                    Some(sale.id.clone()),
                )
                .await?;
        }

        self.financial_repository
            .delete_by_sale_tx(&mut tx, &sale.id)
            .await?;

        tx.commit().await?;

        info!(sale_id = %sale.id, "Canceled sale");
        Ok(sale)
    }
}
