pub mod product_controller;

pub use product_controller::{
    create_product, create_product_category, delete_product, delete_product_category, get_product,
    get_product_category, list_product_categories, list_products, update_product,
    update_product_category,
};
