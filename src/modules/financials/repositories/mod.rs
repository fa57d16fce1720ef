pub mod financial_repository;

pub use financial_repository::FinancialRepository;
