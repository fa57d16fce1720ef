pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::MonetaryType;
pub use repositories::MonetaryTypeRepository;
pub use services::MonetaryTypeService;
