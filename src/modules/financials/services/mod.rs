pub mod financial_service;
pub mod installment_planner;
pub mod payment_ledger;

pub use financial_service::{CreateFinancialInput, FinancialService, PayFinancialInput};
pub use installment_planner::{InstallmentPlan, InstallmentPlanner};
pub use payment_ledger::PaymentLedger;
