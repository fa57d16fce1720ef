pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Financial, FinancialPayment};
pub use repositories::FinancialRepository;
pub use services::{FinancialService, InstallmentPlan, InstallmentPlanner, PaymentLedger};
