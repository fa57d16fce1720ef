pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Address, Client};
pub use repositories::ClientRepository;
pub use services::ClientService;
