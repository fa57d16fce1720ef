pub mod veterinarian;

pub use veterinarian::{Veterinarian, VeterinarianCategory};
