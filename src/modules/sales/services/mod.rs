pub mod sale_lifecycle;
pub mod sale_service;

pub use sale_lifecycle::SaleLifecycle;
pub use sale_service::{CreateSaleInput, CreateSaleItemInput, SaleService};
