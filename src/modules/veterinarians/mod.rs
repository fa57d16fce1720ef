pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Veterinarian, VeterinarianCategory};
pub use repositories::{VeterinarianCategoryRepository, VeterinarianRepository};
pub use services::{VeterinarianCategoryService, VeterinarianService};
