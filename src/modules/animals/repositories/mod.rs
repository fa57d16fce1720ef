pub mod animal_repository;

pub use animal_repository::AnimalRepository;
