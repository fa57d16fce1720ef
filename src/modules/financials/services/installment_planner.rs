use chrono::{Duration, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::financials::models::{Financial, FinancialPayment};
use crate::modules::financials::services::PaymentLedger;

/// Input for one installment series
#[derive(Debug, Clone)]
pub struct InstallmentPlan {
    pub client_id: String,
    /// None for manually created financial records
    pub sale_id: Option<String>,
    pub description_base: String,
    pub total: Decimal,
    pub count: i32,
    pub interval_days: i32,
    /// Anchor date; installment `i` is due `interval_days * i` days after it
    pub start_date: NaiveDate,
    pub date_created: NaiveDate,
    /// Settle every installment at creation time (cash sales, prepaid entries)
    pub paid_on_creation: bool,
    pub notes: Option<String>,
}

/// Partitions a total amount into N installments with deterministic rounding.
///
/// Each of the first `count - 1` installments gets `floor(total / count, 2dp)`;
/// the last installment absorbs the remainder so the series always sums to the
/// exact total.
pub struct InstallmentPlanner;

impl InstallmentPlanner {
    pub fn plan(plan: &InstallmentPlan) -> Result<Vec<Financial>> {
        if plan.count < 1 {
            return Err(AppError::validation(format!(
                "Installment count must be at least 1, got {}",
                plan.count
            )));
        }
        if plan.total < Decimal::ZERO {
            return Err(AppError::validation(
                "Installment total cannot be negative",
            ));
        }

        let count = Decimal::from(plan.count);
        let unit = (plan.total / count).round_dp_with_strategy(2, RoundingStrategy::ToZero);
        let remainder = plan.total - unit * count;

        let installments = (1..=plan.count)
            .map(|number| Self::build_installment(plan, number, unit, remainder))
            .collect();

        info!(
            count = plan.count,
            total = %plan.total,
            interval_days = plan.interval_days,
            "Generated installment series"
        );

        Ok(installments)
    }

    fn build_installment(
        plan: &InstallmentPlan,
        number: i32,
        unit: Decimal,
        remainder: Decimal,
    ) -> Financial {
        let amount = if number == plan.count {
            unit + remainder
        } else {
            unit
        };

        // Even the first installment is offset by the interval, so a single
        // cash installment (interval 0) falls due on the start date itself.
        let due_date = plan.start_date + Duration::days(plan.interval_days as i64 * number as i64);

        let description = if plan.count > 1 {
            format!(
                "{} - Installment {}/{}",
                plan.description_base, number, plan.count
            )
        } else {
            plan.description_base.clone()
        };

        let mut financial = Financial::new(
            plan.client_id.clone(),
            plan.sale_id.clone(),
            description,
            amount,
            due_date,
            plan.date_created,
            number,
            plan.count,
            plan.notes.clone(),
        );

        if plan.paid_on_creation {
            let payment = FinancialPayment::new(
                amount,
                plan.start_date,
                None,
                Some("Paid with cash on creation".to_string()),
            );
            PaymentLedger::add_payment(&mut financial, payment);
        }

        financial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_plan() -> InstallmentPlan {
        InstallmentPlan {
            client_id: "client-1".to_string(),
            sale_id: None,
            description_base: "Sale abc".to_string(),
            total: dec!(100.00),
            count: 3,
            interval_days: 30,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            date_created: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            paid_on_creation: false,
            notes: None,
        }
    }

    #[test]
    fn splits_100_into_three_with_last_absorbing_remainder() {
        let installments = InstallmentPlanner::plan(&base_plan()).unwrap();

        let amounts: Vec<Decimal> = installments.iter().map(|f| f.amount).collect();
        assert_eq!(amounts, vec![dec!(33.33), dec!(33.33), dec!(33.34)]);

        let total: Decimal = installments.iter().map(|f| f.amount).sum();
        assert_eq!(total, dec!(100.00));
    }

    #[test]
    fn due_dates_offset_every_installment_by_the_interval() {
        let installments = InstallmentPlanner::plan(&base_plan()).unwrap();

        assert_eq!(
            installments[0].due_date,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert_eq!(
            installments[1].due_date,
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
        assert_eq!(
            installments[2].due_date,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
    }

    #[test]
    fn descriptions_number_each_installment() {
        let installments = InstallmentPlanner::plan(&base_plan()).unwrap();

        assert_eq!(installments[0].description, "Sale abc - Installment 1/3");
        assert_eq!(installments[1].description, "Sale abc - Installment 2/3");
        assert_eq!(installments[2].description, "Sale abc - Installment 3/3");
    }

    #[test]
    fn single_installment_keeps_description_verbatim() {
        let mut plan = base_plan();
        plan.count = 1;

        let installments = InstallmentPlanner::plan(&plan).unwrap();
        assert_eq!(installments.len(), 1);
        assert_eq!(installments[0].description, "Sale abc");
        assert_eq!(installments[0].amount, dec!(100.00));
        // Single installment with a nonzero interval is still offset from the start
        assert_eq!(
            installments[0].due_date,
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
    }

    #[test]
    fn paid_on_creation_settles_through_the_ledger() {
        let mut plan = base_plan();
        plan.count = 1;
        plan.interval_days = 0;
        plan.paid_on_creation = true;

        let installments = InstallmentPlanner::plan(&plan).unwrap();
        let financial = &installments[0];

        assert!(financial.is_paid);
        assert_eq!(financial.balance, Decimal::ZERO);
        assert_eq!(financial.payment_date, Some(plan.start_date));
        assert_eq!(financial.due_date, plan.start_date);
        assert_eq!(financial.payments.len(), 1);
        assert_eq!(financial.payments[0].paid_amount, dec!(100.00));
        assert_eq!(
            financial.payments[0].notes.as_deref(),
            Some("Paid with cash on creation")
        );
    }

    #[test]
    fn rejects_zero_count() {
        let mut plan = base_plan();
        plan.count = 0;
        assert!(InstallmentPlanner::plan(&plan).is_err());
    }

    #[test]
    fn rejects_negative_total() {
        let mut plan = base_plan();
        plan.total = dec!(-1.00);
        assert!(InstallmentPlanner::plan(&plan).is_err());
    }
}
