pub mod sale_controller;

pub use sale_controller::{cancel_sale, create_sale, get_sale, list_sales};
