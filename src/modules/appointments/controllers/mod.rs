pub mod appointment_controller;

pub use appointment_controller::{
    create_appointment, delete_appointment, get_appointment, list_appointments,
    update_appointment,
};
