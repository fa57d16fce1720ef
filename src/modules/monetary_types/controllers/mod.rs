pub mod monetary_type_controller;

pub use monetary_type_controller::{
    create_monetary_type, delete_monetary_type, get_monetary_type, list_monetary_types,
};
