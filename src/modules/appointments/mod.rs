pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AppointmentStatus, MedicalAppointment};
pub use repositories::AppointmentRepository;
pub use services::{AppointmentService, AppointmentTimeRules, DEFAULT_DURATION_MINUTES};
