pub mod sale;

pub use sale::{ProductSale, Sale, SalePaymentType, SaleStatus};
