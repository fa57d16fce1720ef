use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::financials::models::{Financial, FinancialPayment};

/// Applies and reverts payments against a Financial's balance.
///
/// The caller is responsible for the overpayment guard (rejecting a payment
/// larger than the outstanding balance) before handing the payment over, and
/// for persisting the mutated records afterwards.
pub struct PaymentLedger;

impl PaymentLedger {
    /// Attach `payment` to the financial and settle it against the balance.
    ///
    /// A payment that clears the balance marks the financial paid and stamps
    /// the payment date; anything else just reduces the balance. A monetary
    /// type on the payment is propagated onto the financial, last write wins.
    pub fn add_payment(financial: &mut Financial, mut payment: FinancialPayment) {
        payment.financial_id = financial.id.clone();

        if let Some(monetary_type) = payment.monetary_type_id.clone() {
            financial.monetary_type_id = Some(monetary_type);
        }

        let new_balance = financial.balance - payment.paid_amount;

        if new_balance <= Decimal::ZERO {
            financial.balance = Decimal::ZERO;
            financial.is_paid = true;
            financial.payment_date = Some(payment.payment_date);
        } else {
            financial.balance = new_balance;
            financial.is_paid = false;
        }

        financial.payments.push(payment);
    }

    /// Detach the payment with `payment_id` and restore its amount to the
    /// balance. Returns the removed payment so the caller can delete the row.
    ///
    /// The financial is left unpaid with its payment date cleared even when
    /// the balance would still be zero; revert never re-derives paid status.
    pub fn revert_payment(
        financial: &mut Financial,
        payment_id: &str,
    ) -> Result<FinancialPayment> {
        let position = financial
            .payments
            .iter()
            .position(|payment| payment.id == payment_id)
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Financial Payment not found with ID: {}",
                    payment_id
                ))
            })?;

        let payment = financial.payments.remove(position);

        financial.balance += payment.paid_amount;
        financial.is_paid = false;
        financial.payment_date = None;

        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn financial(amount: Decimal) -> Financial {
        Financial::new(
            "client-1".to_string(),
            None,
            "Vaccines".to_string(),
            amount,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            1,
            1,
            None,
        )
    }

    fn payment(amount: Decimal) -> FinancialPayment {
        FinancialPayment::new(
            amount,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            None,
            None,
        )
    }

    #[test]
    fn partial_payment_reduces_balance_without_settling() {
        let mut financial = financial(dec!(100.00));

        PaymentLedger::add_payment(&mut financial, payment(dec!(40.00)));

        assert_eq!(financial.balance, dec!(60.00));
        assert!(!financial.is_paid);
        assert!(financial.payment_date.is_none());
        assert_eq!(financial.payments.len(), 1);
        assert_eq!(financial.payments[0].financial_id, financial.id);
    }

    #[test]
    fn exact_payment_settles_and_stamps_payment_date() {
        let mut financial = financial(dec!(100.00));

        PaymentLedger::add_payment(&mut financial, payment(dec!(100.00)));

        assert_eq!(financial.balance, Decimal::ZERO);
        assert!(financial.is_paid);
        assert_eq!(
            financial.payment_date,
            Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
    }

    #[test]
    fn monetary_type_propagates_last_write_wins() {
        let mut financial = financial(dec!(100.00));

        let mut first = payment(dec!(30.00));
        first.monetary_type_id = Some("cash".to_string());
        PaymentLedger::add_payment(&mut financial, first);
        assert_eq!(financial.monetary_type_id.as_deref(), Some("cash"));

        let mut second = payment(dec!(30.00));
        second.monetary_type_id = Some("pix".to_string());
        PaymentLedger::add_payment(&mut financial, second);
        assert_eq!(financial.monetary_type_id.as_deref(), Some("pix"));

        // A payment without a monetary type leaves the previous one in place
        PaymentLedger::add_payment(&mut financial, payment(dec!(10.00)));
        assert_eq!(financial.monetary_type_id.as_deref(), Some("pix"));
    }

    #[test]
    fn revert_restores_balance_and_forces_unpaid() {
        let mut financial = financial(dec!(100.00));

        PaymentLedger::add_payment(&mut financial, payment(dec!(100.00)));
        assert!(financial.is_paid);
        let payment_id = financial.payments[0].id.clone();

        let reverted = PaymentLedger::revert_payment(&mut financial, &payment_id).unwrap();

        assert_eq!(reverted.paid_amount, dec!(100.00));
        assert_eq!(financial.balance, dec!(100.00));
        assert!(!financial.is_paid);
        assert!(financial.payment_date.is_none());
        assert!(financial.payments.is_empty());
    }

    #[test]
    fn add_then_revert_round_trips_the_balance() {
        let mut financial = financial(dec!(80.00));
        PaymentLedger::add_payment(&mut financial, payment(dec!(50.00)));
        let balance_after_first = financial.balance;

        PaymentLedger::add_payment(&mut financial, payment(dec!(25.00)));
        let second_id = financial.payments[1].id.clone();

        PaymentLedger::revert_payment(&mut financial, &second_id).unwrap();

        assert_eq!(financial.balance, balance_after_first);
        assert!(!financial.is_paid);
    }

    #[test]
    fn revert_of_unknown_payment_is_not_found() {
        let mut financial = financial(dec!(10.00));
        let err = PaymentLedger::revert_payment(&mut financial, "missing").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
