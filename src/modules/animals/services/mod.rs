pub mod animal_service;

pub use animal_service::{AnimalService, CreateAnimalInput, UpdateAnimalInput};
