use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, Transaction};
use tracing::info;

use crate::core::{require, AppError, Result};
use crate::modules::clients::repositories::ClientRepository;
use crate::modules::financials::models::{Financial, FinancialPayment};
use crate::modules::financials::repositories::FinancialRepository;
use crate::modules::financials::services::{InstallmentPlan, InstallmentPlanner, PaymentLedger};
use crate::modules::monetary_types::repositories::MonetaryTypeRepository;
use crate::modules::sales::models::{Sale, SalePaymentType};
use crate::modules::sales::repositories::SaleRepository;

/// Parameters for a manually created installment series
#[derive(Debug, Clone)]
pub struct CreateFinancialInput {
    pub client_id: String,
    pub sale_id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    pub installments: i32,
    pub interval_days: i32,
    pub due_date: Option<NaiveDate>,
    pub is_paid: bool,
    pub notes: Option<String>,
}

/// Parameters for registering one payment against a financial
#[derive(Debug, Clone)]
pub struct PayFinancialInput {
    pub paid_amount: Decimal,
    pub payment_date: NaiveDate,
    pub monetary_type_id: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Business logic for financial records: planning, payment, refund, deletion
pub struct FinancialService {
    repository: FinancialRepository,
    clients: ClientRepository,
    sales: SaleRepository,
    monetary_types: MonetaryTypeRepository,
}

impl FinancialService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: FinancialRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            sales: SaleRepository::new(pool.clone()),
            monetary_types: MonetaryTypeRepository::new(pool),
        }
    }

    pub async fn get_financial(&self, id: &str) -> Result<Financial> {
        require(self.repository.find_by_id(id).await?, "Financial", &id)
    }

    pub async fn list_financials(&self, limit: i64, offset: i64) -> Result<Vec<Financial>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_client_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Financial>> {
        self.repository
            .search_by_client_name(name, limit, offset)
            .await
    }

    /// Create a manual installment series through the planner
    pub async fn create_manual(&self, input: CreateFinancialInput) -> Result<Vec<Financial>> {
        if input.amount <= Decimal::ZERO {
            return Err(AppError::validation("The amount needs to be positive"));
        }
        if input.interval_days < 0 {
            return Err(AppError::validation("The interval must be positive"));
        }

        require(
            self.clients.find_by_id(&input.client_id).await?,
            "Client",
            &input.client_id,
        )?;
        if let Some(sale_id) = &input.sale_id {
            require(self.sales.find_by_id(sale_id).await?, "Sale", sale_id)?;
        }

        let today = Utc::now().date_naive();
        let plan = InstallmentPlan {
            client_id: input.client_id,
            sale_id: input.sale_id,
            description_base: input.description,
            total: input.amount,
            count: input.installments,
            interval_days: input.interval_days,
            start_date: input.due_date.unwrap_or(today),
            date_created: today,
            paid_on_creation: input.is_paid,
            notes: input.notes,
        };

        let financials = InstallmentPlanner::plan(&plan)?;
        self.repository.insert_batch(&financials).await?;

        info!(count = financials.len(), "Created manual financial records");
        Ok(financials)
    }

    /// Generate and persist the financial series for a freshly created sale,
    /// inside the sale's transaction
    pub async fn create_from_sale_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        sale: &Sale,
        installments: i32,
        interval_days: i32,
        today: NaiveDate,
    ) -> Result<Vec<Financial>> {
        let plan = match sale.payment_type {
            SalePaymentType::Cash => InstallmentPlan {
                client_id: sale.client_id.clone(),
                sale_id: Some(sale.id.clone()),
                description_base: format!("Sale {}", sale.id),
                total: sale.total_value,
                count: 1,
                interval_days: 0,
                start_date: today,
                date_created: today,
                paid_on_creation: true,
                notes: sale.notes.clone(),
            },
            SalePaymentType::Installments => InstallmentPlan {
                client_id: sale.client_id.clone(),
                sale_id: Some(sale.id.clone()),
                description_base: format!("Sale {}", sale.id),
                total: sale.total_value,
                count: installments,
                interval_days,
                start_date: today,
                date_created: today,
                paid_on_creation: false,
                notes: sale.notes.clone(),
            },
        };

        let financials = InstallmentPlanner::plan(&plan)?;
        self.repository.insert_batch_tx(tx, &financials).await?;
        Ok(financials)
    }

    /// Register a payment; the overpayment guard runs before any mutation
    pub async fn pay_financial(&self, id: &str, input: PayFinancialInput) -> Result<Financial> {
        if input.paid_amount <= Decimal::ZERO {
            return Err(AppError::validation("The paid amount needs to be positive"));
        }

        let mut financial = self.get_financial(id).await?;

        if input.paid_amount > financial.balance {
            return Err(AppError::business(
                "The paid amount cannot be greater than the financial amount.",
            ));
        }

        if let Some(monetary_type_id) = &input.monetary_type_id {
            require(
                self.monetary_types.find_by_id(monetary_type_id).await?,
                "Monetary Type",
                monetary_type_id,
            )?;
        }

        let payment = FinancialPayment::new(
            input.paid_amount,
            input.payment_date,
            input.monetary_type_id,
            input.notes,
        );
        PaymentLedger::add_payment(&mut financial, payment);

        if let Some(next_due_date) = input.next_due_date {
            financial.due_date = next_due_date;
        }

        let stored = financial
            .payments
            .last()
            .cloned()
            .ok_or_else(|| AppError::internal("Payment ledger left no payment attached"))?;
        self.repository.record_payment(&financial, &stored).await?;

        info!(
            financial_id = id,
            paid_amount = %stored.paid_amount,
            is_paid = financial.is_paid,
            "Registered financial payment"
        );
        Ok(financial)
    }

    /// Revert a payment and delete its record
    pub async fn refund_payment(&self, payment_id: &str) -> Result<Financial> {
        let payment = require(
            self.repository.find_payment(payment_id).await?,
            "Financial Payment",
            &payment_id,
        )?;

        let mut financial = self.get_financial(&payment.financial_id).await?;
        PaymentLedger::revert_payment(&mut financial, payment_id)?;
        self.repository.remove_payment(&financial, payment_id).await?;

        info!(
            financial_id = %financial.id,
            payment_id,
            "Reverted financial payment"
        );
        Ok(financial)
    }

    /// Delete an unpaid financial record; paid records are immutable history
    pub async fn delete_financial(&self, id: &str) -> Result<()> {
        let financial = self.get_financial(id).await?;

        if financial.is_paid {
            return Err(AppError::business(
                "Cannot delete a financial record that has already been paid",
            ));
        }

        self.repository.delete(id).await
    }
}
