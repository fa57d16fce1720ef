pub mod client;

pub use client::{Address, Client};
