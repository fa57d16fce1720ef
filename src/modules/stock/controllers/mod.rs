pub mod stock_movement_controller;

pub use stock_movement_controller::{
    list_stock_movements, register_stock_input, register_stock_output,
};
