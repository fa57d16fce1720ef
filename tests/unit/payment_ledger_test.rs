// Ledger semantics: settlement on exact payment, partial payments, the
// add/revert round trip, and the deliberate asymmetry of revert.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use petshop::financials::{Financial, FinancialPayment, PaymentLedger};

fn financial(amount: Decimal) -> Financial {
    Financial::new(
        "client-1".to_string(),
        None,
        "Grooming package".to_string(),
        amount,
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        1,
        1,
        None,
    )
}

fn payment(amount: Decimal, day: u32) -> FinancialPayment {
    FinancialPayment::new(
        amount,
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
        None,
        None,
    )
}

#[test]
fn exact_payment_settles_the_financial() {
    let mut financial = financial(dec!(100.00));

    PaymentLedger::add_payment(&mut financial, payment(dec!(100.00), 20));

    assert_eq!(financial.balance, Decimal::ZERO);
    assert!(financial.is_paid);
    assert_eq!(
        financial.payment_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap())
    );
}

#[test]
fn partial_payment_keeps_the_financial_open() {
    let mut financial = financial(dec!(100.00));

    PaymentLedger::add_payment(&mut financial, payment(dec!(40.00), 10));

    assert_eq!(financial.balance, dec!(60.00));
    assert!(!financial.is_paid);
    assert!(financial.payment_date.is_none());
}

#[test]
fn successive_partials_settle_on_the_last_one() {
    let mut financial = financial(dec!(90.00));

    PaymentLedger::add_payment(&mut financial, payment(dec!(30.00), 5));
    PaymentLedger::add_payment(&mut financial, payment(dec!(30.00), 12));
    assert!(!financial.is_paid);

    PaymentLedger::add_payment(&mut financial, payment(dec!(30.00), 19));
    assert!(financial.is_paid);
    assert_eq!(financial.balance, Decimal::ZERO);
    assert_eq!(
        financial.payment_date,
        Some(NaiveDate::from_ymd_opt(2025, 1, 19).unwrap())
    );
    assert_eq!(financial.payments.len(), 3);
}

#[test]
fn revert_restores_the_pre_payment_state() {
    let mut financial = financial(dec!(100.00));

    PaymentLedger::add_payment(&mut financial, payment(dec!(100.00), 20));
    let payment_id = financial.payments[0].id.clone();

    let removed = PaymentLedger::revert_payment(&mut financial, &payment_id).unwrap();

    assert_eq!(removed.paid_amount, dec!(100.00));
    assert_eq!(financial.balance, dec!(100.00));
    assert!(!financial.is_paid);
    assert!(financial.payment_date.is_none());
    assert!(financial.payments.is_empty());
}

// Revert never re-derives paid status: even if the balance is still zero
// after reverting (a zero-amount financial), the record is forced unpaid.
#[test]
fn revert_forces_unpaid_even_at_zero_balance() {
    let mut financial = financial(Decimal::ZERO);

    PaymentLedger::add_payment(&mut financial, payment(Decimal::ZERO, 8));
    assert!(financial.is_paid);

    let payment_id = financial.payments[0].id.clone();
    PaymentLedger::revert_payment(&mut financial, &payment_id).unwrap();

    assert_eq!(financial.balance, Decimal::ZERO);
    assert!(!financial.is_paid);
    assert!(financial.payment_date.is_none());
}

#[test]
fn monetary_type_propagates_to_the_financial() {
    let mut financial = financial(dec!(50.00));

    let mut paid = payment(dec!(50.00), 15);
    paid.monetary_type_id = Some("pix".to_string());
    PaymentLedger::add_payment(&mut financial, paid);

    assert_eq!(financial.monetary_type_id.as_deref(), Some("pix"));
}

proptest! {
    /// add then revert is the identity on balance, for any split of the
    /// amount into two payments
    #[test]
    fn add_revert_round_trip(
        amount_cents in 1i64..1_000_000,
        paid_cents in 1i64..1_000_000,
    ) {
        let amount = Decimal::new(amount_cents, 2);
        let paid = Decimal::new(paid_cents.min(amount_cents), 2);

        let mut record = financial(amount);
        let balance_before = record.balance;

        PaymentLedger::add_payment(&mut record, payment(paid, 10));
        let payment_id = record.payments[0].id.clone();
        PaymentLedger::revert_payment(&mut record, &payment_id).unwrap();

        prop_assert_eq!(record.balance, balance_before);
        prop_assert!(!record.is_paid);
        prop_assert!(record.payments.is_empty());
    }

    /// The balance never goes negative no matter how the payment relates
    /// to the outstanding balance
    #[test]
    fn balance_is_never_negative(
        amount_cents in 0i64..1_000_000,
        paid_cents in 0i64..2_000_000,
    ) {
        let mut record = financial(Decimal::new(amount_cents, 2));

        PaymentLedger::add_payment(&mut record, payment(Decimal::new(paid_cents, 2), 10));

        prop_assert!(record.balance >= Decimal::ZERO);
    }
}
