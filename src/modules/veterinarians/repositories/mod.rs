pub mod veterinarian_repository;

pub use veterinarian_repository::{VeterinarianCategoryRepository, VeterinarianRepository};
