pub mod veterinarian_controller;

pub use veterinarian_controller::{
    create_veterinarian, create_veterinarian_category, delete_veterinarian,
    delete_veterinarian_category, get_veterinarian, get_veterinarian_category,
    list_veterinarian_categories, list_veterinarians, update_veterinarian,
    update_veterinarian_category,
};
