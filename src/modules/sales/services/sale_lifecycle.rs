use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::financials::models::Financial;
use crate::modules::sales::models::{ProductSale, Sale, SaleStatus};

/// Sale totals and the COMPLETED -> CANCELED transition.
///
/// Cancellation mutates only in-memory state; the service layer is
/// responsible for deleting the financial rows and crediting stock back
/// afterwards.
pub struct SaleLifecycle;

impl SaleLifecycle {
    /// Sum of `quantity * unit_price` over all line items; zero for an empty
    /// list
    pub fn calculate_total(items: &[ProductSale]) -> Decimal {
        items
            .iter()
            .map(|item| item.unit_price * Decimal::from(item.quantity))
            .sum()
    }

    /// Cancel a completed sale.
    ///
    /// Re-cancelling is an error, not a no-op, and a sale with any paid
    /// installment cannot be cancelled at all. Both guards run before any
    /// state changes; on success the financial collection is emptied.
    pub fn cancel(sale: &mut Sale, financials: &mut Vec<Financial>) -> Result<()> {
        if sale.status == SaleStatus::Canceled {
            return Err(AppError::business("This sale is already canceled"));
        }

        if financials.iter().any(|financial| financial.is_paid) {
            return Err(AppError::business(
                "Cannot cancel a sale with paid installments.",
            ));
        }

        sale.status = SaleStatus::Canceled;
        financials.clear();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::sales::models::SalePaymentType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sale() -> Sale {
        Sale::new("client-1".to_string(), SalePaymentType::Cash, None)
    }

    fn financial(is_paid: bool) -> Financial {
        let mut financial = Financial::new(
            "client-1".to_string(),
            Some("sale-1".to_string()),
            "Sale sale-1".to_string(),
            dec!(50.00),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            1,
            1,
            None,
        );
        financial.is_paid = is_paid;
        financial
    }

    #[test]
    fn total_is_quantity_times_unit_price_summed() {
        let items = vec![
            ProductSale::new("s".into(), "p1".into(), 2, dec!(10.50)),
            ProductSale::new("s".into(), "p2".into(), 3, dec!(4.00)),
        ];

        assert_eq!(SaleLifecycle::calculate_total(&items), dec!(33.00));
    }

    #[test]
    fn total_of_empty_item_list_is_zero() {
        assert_eq!(SaleLifecycle::calculate_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn cancel_transitions_and_empties_financials() {
        let mut sale = sale();
        let mut financials = vec![financial(false), financial(false)];

        SaleLifecycle::cancel(&mut sale, &mut financials).unwrap();

        assert_eq!(sale.status, SaleStatus::Canceled);
        assert!(financials.is_empty());
    }

    #[test]
    fn cancel_twice_is_an_error() {
        let mut sale = sale();
        let mut financials = Vec::new();

        SaleLifecycle::cancel(&mut sale, &mut financials).unwrap();
        let err = SaleLifecycle::cancel(&mut sale, &mut financials).unwrap_err();

        assert_eq!(err.to_string(), "This sale is already canceled");
    }

    #[test]
    fn cancel_with_paid_installment_leaves_everything_untouched() {
        let mut sale = sale();
        let mut financials = vec![financial(false), financial(true)];

        let err = SaleLifecycle::cancel(&mut sale, &mut financials).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot cancel a sale with paid installments."
        );
        assert_eq!(sale.status, SaleStatus::Completed);
        assert_eq!(financials.len(), 2);
    }
}
