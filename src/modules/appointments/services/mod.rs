pub mod appointment_service;
pub mod appointment_time;

pub use appointment_service::{
    AppointmentService, CreateAppointmentInput, UpdateAppointmentInput,
};
pub use appointment_time::{AppointmentTimeRules, DEFAULT_DURATION_MINUTES};
