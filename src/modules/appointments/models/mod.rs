pub mod medical_appointment;

pub use medical_appointment::{AppointmentStatus, MedicalAppointment};
