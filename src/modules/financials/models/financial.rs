use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single payable obligation (one installment of a sale or a manual entry)
///
/// `balance` starts equal to `amount` and only moves through the payment
/// ledger: it decreases as payments are applied, increases when payments are
/// reverted, and is never negative. `is_paid` is true iff the balance reached
/// zero through a payment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Financial {
    pub id: String,
    pub description: String,
    /// Original installment amount, immutable after creation
    pub amount: Decimal,
    /// Remaining amount owed
    pub balance: Decimal,
    pub date_created: NaiveDate,
    pub due_date: NaiveDate,
    /// Set when the balance reaches zero, cleared when that payment is reverted
    pub payment_date: Option<NaiveDate>,
    pub is_paid: bool,
    /// 1-based position within the series, used for the description text
    pub installment_number: i32,
    pub total_installments: i32,
    pub notes: Option<String>,
    pub monetary_type_id: Option<String>,
    pub client_id: String,
    pub sale_id: Option<String>,
    /// Owned payment events; loaded separately from `financial_payments`
    #[sqlx(skip)]
    #[serde(default)]
    pub payments: Vec<FinancialPayment>,
}

impl Financial {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client_id: String,
        sale_id: Option<String>,
        description: String,
        amount: Decimal,
        due_date: NaiveDate,
        date_created: NaiveDate,
        installment_number: i32,
        total_installments: i32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description,
            amount,
            balance: amount,
            date_created,
            due_date,
            payment_date: None,
            is_paid: false,
            installment_number,
            total_installments,
            notes,
            monetary_type_id: None,
            client_id,
            sale_id,
            payments: Vec::new(),
        }
    }
}

/// One payment event against a Financial
///
/// The back-reference to the owning Financial is a plain id, set when the
/// payment is attached through the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FinancialPayment {
    pub id: String,
    pub financial_id: String,
    pub paid_amount: Decimal,
    pub payment_date: NaiveDate,
    pub monetary_type_id: Option<String>,
    pub notes: Option<String>,
}

impl FinancialPayment {
    pub fn new(
        paid_amount: Decimal,
        payment_date: NaiveDate,
        monetary_type_id: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            financial_id: String::new(),
            paid_amount,
            payment_date,
            monetary_type_id,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_financial_starts_unpaid_with_full_balance() {
        let financial = Financial::new(
            "client-1".to_string(),
            None,
            "Grooming".to_string(),
            dec!(120.00),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            1,
            1,
            None,
        );

        assert_eq!(financial.balance, financial.amount);
        assert!(!financial.is_paid);
        assert!(financial.payment_date.is_none());
        assert!(financial.payments.is_empty());
    }
}
