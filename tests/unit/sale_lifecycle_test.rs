// Sale totals and the cancellation state machine, including the guard
// against cancelling with paid installments.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use petshop::financials::{Financial, FinancialPayment, PaymentLedger};
use petshop::sales::{ProductSale, Sale, SaleLifecycle, SalePaymentType, SaleStatus};

fn sale() -> Sale {
    Sale::new(
        "client-1".to_string(),
        SalePaymentType::Installments,
        None,
    )
}

fn installment(amount: Decimal) -> Financial {
    Financial::new(
        "client-1".to_string(),
        Some("sale-1".to_string()),
        "Sale sale-1 - Installment 1/2".to_string(),
        amount,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        1,
        2,
        None,
    )
}

#[test]
fn total_sums_quantity_times_unit_price() {
    let items = vec![
        ProductSale::new("sale-1".into(), "food".into(), 3, dec!(25.00)),
        ProductSale::new("sale-1".into(), "leash".into(), 1, dec!(18.90)),
        ProductSale::new("sale-1".into(), "toy".into(), 2, dec!(7.05)),
    ];

    assert_eq!(SaleLifecycle::calculate_total(&items), dec!(108.00));
}

#[test]
fn empty_sale_totals_zero() {
    assert_eq!(SaleLifecycle::calculate_total(&[]), Decimal::ZERO);
}

#[test]
fn cancel_completed_sale_with_unpaid_installments() {
    let mut sale = sale();
    let mut financials = vec![installment(dec!(50.00)), installment(dec!(50.00))];

    SaleLifecycle::cancel(&mut sale, &mut financials).unwrap();

    assert_eq!(sale.status, SaleStatus::Canceled);
    assert!(financials.is_empty());
}

#[test]
fn cancelling_twice_is_rejected() {
    let mut sale = sale();
    let mut financials = Vec::new();

    SaleLifecycle::cancel(&mut sale, &mut financials).unwrap();

    let err = SaleLifecycle::cancel(&mut sale, &mut financials).unwrap_err();
    assert_eq!(err.to_string(), "This sale is already canceled");
    assert_eq!(sale.status, SaleStatus::Canceled);
}

#[test]
fn paid_installment_blocks_cancellation() {
    let mut sale = sale();
    let mut paid = installment(dec!(50.00));
    PaymentLedger::add_payment(
        &mut paid,
        FinancialPayment::new(
            dec!(50.00),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            None,
            None,
        ),
    );
    let mut financials = vec![installment(dec!(50.00)), paid];

    let err = SaleLifecycle::cancel(&mut sale, &mut financials).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cannot cancel a sale with paid installments."
    );
    // Nothing mutated: status and the financial collection are untouched
    assert_eq!(sale.status, SaleStatus::Completed);
    assert_eq!(financials.len(), 2);
}

#[test]
fn partial_payment_does_not_block_cancellation() {
    let mut sale = sale();
    let mut partially_paid = installment(dec!(80.00));
    PaymentLedger::add_payment(
        &mut partially_paid,
        FinancialPayment::new(
            dec!(30.00),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            None,
            None,
        ),
    );
    let mut financials = vec![partially_paid];

    SaleLifecycle::cancel(&mut sale, &mut financials).unwrap();
    assert_eq!(sale.status, SaleStatus::Canceled);
}
