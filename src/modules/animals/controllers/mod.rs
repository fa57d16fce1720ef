pub mod animal_controller;

pub use animal_controller::{
    create_animal, delete_animal, get_animal, list_animals, update_animal,
};
