pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{ProductSale, Sale, SalePaymentType, SaleStatus};
pub use repositories::SaleRepository;
pub use services::{SaleLifecycle, SaleService};
