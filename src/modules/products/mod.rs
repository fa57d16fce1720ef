pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, ProductCategory};
pub use repositories::{ProductCategoryRepository, ProductRepository};
pub use services::{ProductCategoryService, ProductService};
