pub mod client_controller;

pub use client_controller::{
    create_client, delete_client, get_client, list_clients, update_client,
};
