pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{MovementType, StockMovement};
pub use repositories::StockMovementRepository;
pub use services::StockMovementService;
