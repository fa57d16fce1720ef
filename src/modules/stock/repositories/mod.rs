pub mod stock_movement_repository;

pub use stock_movement_repository::StockMovementRepository;
