// Property-based tests for the installment arithmetic: exact sum
// preservation, floor-rounded prefix amounts, and due-date spacing.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use petshop::financials::{InstallmentPlan, InstallmentPlanner};

fn plan(total: Decimal, count: i32, interval_days: i32, start: NaiveDate) -> InstallmentPlan {
    InstallmentPlan {
        client_id: "client-1".to_string(),
        sale_id: None,
        description_base: "Order 42".to_string(),
        total,
        count,
        interval_days,
        start_date: start,
        date_created: start,
        paid_on_creation: false,
        notes: None,
    }
}

proptest! {
    /// The series always sums to the exact total, whatever the rounding
    #[test]
    fn amounts_sum_to_total(cents in 0i64..10_000_000, count in 1i32..=48) {
        let total = Decimal::new(cents, 2);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let installments = InstallmentPlanner::plan(&plan(total, count, 30, start)).unwrap();

        let sum: Decimal = installments.iter().map(|f| f.amount).sum();
        prop_assert_eq!(sum, total);
        prop_assert_eq!(installments.len(), count as usize);
    }

    /// Every installment but the last carries the floor-rounded unit; the
    /// last absorbs whatever is left
    #[test]
    fn prefix_installments_carry_the_floored_unit(
        cents in 0i64..10_000_000,
        count in 1i32..=48,
    ) {
        let total = Decimal::new(cents, 2);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let unit = (total / Decimal::from(count))
            .round_dp_with_strategy(2, RoundingStrategy::ToZero);

        let installments = InstallmentPlanner::plan(&plan(total, count, 30, start)).unwrap();

        for financial in &installments[..installments.len() - 1] {
            prop_assert_eq!(financial.amount, unit);
        }
        prop_assert!(installments.last().unwrap().amount >= unit);
    }

    /// Balance starts equal to amount on every generated installment
    #[test]
    fn balances_start_at_full_amount(cents in 0i64..1_000_000, count in 1i32..=12) {
        let total = Decimal::new(cents, 2);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let installments = InstallmentPlanner::plan(&plan(total, count, 15, start)).unwrap();

        for financial in &installments {
            prop_assert_eq!(financial.balance, financial.amount);
            prop_assert!(!financial.is_paid);
        }
    }

    /// Installment i is due exactly interval_days * i after the start date,
    /// including the first one
    #[test]
    fn due_dates_step_by_the_interval(
        count in 1i32..=24,
        interval_days in 0i32..=90,
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

        let installments =
            InstallmentPlanner::plan(&plan(dec!(500.00), count, interval_days, start)).unwrap();

        for (index, financial) in installments.iter().enumerate() {
            let number = (index + 1) as i64;
            let expected = start + Duration::days(interval_days as i64 * number);
            prop_assert_eq!(financial.due_date, expected);
        }
    }
}

#[test]
fn hundred_over_three_monthly_scenario() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let installments = InstallmentPlanner::plan(&plan(dec!(100.00), 3, 30, start)).unwrap();

    let amounts: Vec<Decimal> = installments.iter().map(|f| f.amount).collect();
    assert_eq!(amounts, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);

    let due_dates: Vec<NaiveDate> = installments.iter().map(|f| f.due_date).collect();
    assert_eq!(
        due_dates,
        vec![
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        ]
    );

    assert!(installments[0].description.ends_with("Installment 1/3"));
    assert!(installments[1].description.ends_with("Installment 2/3"));
    assert!(installments[2].description.ends_with("Installment 3/3"));
}

#[test]
fn cash_plan_is_paid_up_front_and_due_immediately() {
    let start = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
    let mut cash = plan(dec!(75.50), 1, 0, start);
    cash.paid_on_creation = true;

    let installments = InstallmentPlanner::plan(&cash).unwrap();
    assert_eq!(installments.len(), 1);

    let financial = &installments[0];
    assert_eq!(financial.due_date, start);
    assert_eq!(financial.balance, Decimal::ZERO);
    assert!(financial.is_paid);
    assert_eq!(financial.payment_date, Some(start));
    assert_eq!(financial.payments.len(), 1);
}
