pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Animal;
pub use repositories::AnimalRepository;
pub use services::AnimalService;
