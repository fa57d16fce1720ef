pub mod veterinarian_service;

pub use veterinarian_service::{
    CreateVeterinarianInput, UpdateVeterinarianInput, VeterinarianCategoryService,
    VeterinarianService,
};
