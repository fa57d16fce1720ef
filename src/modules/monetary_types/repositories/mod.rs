pub mod monetary_type_repository;

pub use monetary_type_repository::MonetaryTypeRepository;
