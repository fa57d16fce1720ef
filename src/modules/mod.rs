pub mod animals;
pub mod appointments;
pub mod clients;
pub mod financials;
pub mod monetary_types;
pub mod products;
pub mod sales;
pub mod stock;
pub mod veterinarians;
