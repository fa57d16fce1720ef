pub mod financial;

pub use financial::{Financial, FinancialPayment};
