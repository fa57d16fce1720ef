use sqlx::{MySql, MySqlPool, Transaction};

use crate::core::Result;
use crate::modules::financials::models::{Financial, FinancialPayment};

const FINANCIAL_COLUMNS: &str = "id, description, amount, balance, date_created, due_date, \
     payment_date, is_paid, installment_number, total_installments, notes, monetary_type_id, \
     client_id, sale_id";

/// MySQL persistence for financial records and their payments
pub struct FinancialRepository {
    pool: MySqlPool,
}

impl FinancialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Load a financial together with its owned payments
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Financial>> {
        let financial = sqlx::query_as::<_, Financial>(&format!(
            "SELECT {} FROM financials WHERE id = ?",
            FINANCIAL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut financial) = financial else {
            return Ok(None);
        };

        financial.payments = self.find_payments(&financial.id).await?;
        Ok(Some(financial))
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Financial>> {
        let financials = sqlx::query_as::<_, Financial>(&format!(
            "SELECT {} FROM financials ORDER BY due_date, installment_number LIMIT ? OFFSET ?",
            FINANCIAL_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(financials)
    }

    pub async fn search_by_client_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Financial>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let financials = sqlx::query_as::<_, Financial>(&format!(
            "SELECT f.{} FROM financials f \
             JOIN clients c ON c.id = f.client_id \
             WHERE LOWER(c.name) LIKE ? \
             ORDER BY f.due_date, f.installment_number LIMIT ? OFFSET ?",
            FINANCIAL_COLUMNS.replace(", ", ", f.")
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(financials)
    }

    pub async fn find_by_sale(&self, sale_id: &str) -> Result<Vec<Financial>> {
        let financials = sqlx::query_as::<_, Financial>(&format!(
            "SELECT {} FROM financials WHERE sale_id = ? ORDER BY installment_number",
            FINANCIAL_COLUMNS
        ))
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(financials)
    }

    pub async fn find_payments(&self, financial_id: &str) -> Result<Vec<FinancialPayment>> {
        let payments = sqlx::query_as::<_, FinancialPayment>(
            "SELECT id, financial_id, paid_amount, payment_date, monetary_type_id, notes \
             FROM financial_payments WHERE financial_id = ? ORDER BY payment_date, id",
        )
        .bind(financial_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn find_payment(&self, payment_id: &str) -> Result<Option<FinancialPayment>> {
        let payment = sqlx::query_as::<_, FinancialPayment>(
            "SELECT id, financial_id, paid_amount, payment_date, monetary_type_id, notes \
             FROM financial_payments WHERE id = ?",
        )
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Persist a freshly planned installment series, payments included
    pub async fn insert_batch(&self, financials: &[Financial]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        self.insert_batch_tx(&mut tx, financials).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn insert_batch_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        financials: &[Financial],
    ) -> Result<()> {
        for financial in financials {
            sqlx::query(
                "INSERT INTO financials (id, description, amount, balance, date_created, \
                 due_date, payment_date, is_paid, installment_number, total_installments, \
                 notes, monetary_type_id, client_id, sale_id) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&financial.id)
            .bind(&financial.description)
            .bind(financial.amount)
            .bind(financial.balance)
            .bind(financial.date_created)
            .bind(financial.due_date)
            .bind(financial.payment_date)
            .bind(financial.is_paid)
            .bind(financial.installment_number)
            .bind(financial.total_installments)
            .bind(&financial.notes)
            .bind(&financial.monetary_type_id)
            .bind(&financial.client_id)
            .bind(&financial.sale_id)
            .execute(&mut **tx)
            .await?;

            for payment in &financial.payments {
                Self::insert_payment_tx(tx, payment).await?;
            }
        }

        Ok(())
    }

    async fn insert_payment_tx(
        tx: &mut Transaction<'_, MySql>,
        payment: &FinancialPayment,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO financial_payments (id, financial_id, paid_amount, payment_date, \
             monetary_type_id, notes) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&payment.id)
        .bind(&payment.financial_id)
        .bind(payment.paid_amount)
        .bind(payment.payment_date)
        .bind(&payment.monetary_type_id)
        .bind(&payment.notes)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn update_tx(tx: &mut Transaction<'_, MySql>, financial: &Financial) -> Result<()> {
        sqlx::query(
            "UPDATE financials SET balance = ?, is_paid = ?, payment_date = ?, due_date = ?, \
             monetary_type_id = ? WHERE id = ?",
        )
        .bind(financial.balance)
        .bind(financial.is_paid)
        .bind(financial.payment_date)
        .bind(financial.due_date)
        .bind(&financial.monetary_type_id)
        .bind(&financial.id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Persist the outcome of `PaymentLedger::add_payment` atomically
    pub async fn record_payment(
        &self,
        financial: &Financial,
        payment: &FinancialPayment,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        Self::update_tx(&mut tx, financial).await?;
        Self::insert_payment_tx(&mut tx, payment).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Persist the outcome of `PaymentLedger::revert_payment` atomically
    pub async fn remove_payment(&self, financial: &Financial, payment_id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        Self::update_tx(&mut tx, financial).await?;
        sqlx::query("DELETE FROM financial_payments WHERE id = ?")
            .bind(payment_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    /// Delete a financial; its payments go with it (FK cascade)
    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM financials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_by_sale_tx(
        &self,
        tx: &mut Transaction<'_, MySql>,
        sale_id: &str,
    ) -> Result<()> {
        sqlx::query("DELETE FROM financials WHERE sale_id = ?")
            .bind(sale_id)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    pub async fn exists_by_monetary_type(&self, monetary_type_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM financials WHERE monetary_type_id = ?",
        )
        .bind(monetary_type_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }
}
