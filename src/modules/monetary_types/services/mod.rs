pub mod monetary_type_service;

pub use monetary_type_service::MonetaryTypeService;
