use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Appointment state; only SCHEDULED appointments may be deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for AppointmentStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "SCHEDULED" => Ok(Self::Scheduled),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(format!("Invalid appointment status: {}", value)),
        }
    }
}

/// A scheduled slot for one veterinarian, one client, one animal.
///
/// The end time is always derived from start + duration; the invariant that
/// no two appointments for the same veterinarian overlap is enforced at
/// creation and update time against `[start, end)` intervals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MedicalAppointment {
    pub id: String,
    pub client_id: String,
    pub animal_id: String,
    pub veterinarian_id: String,
    pub appointment_start_time: NaiveDateTime,
    pub appointment_end_time: NaiveDateTime,
    pub duration_minutes: i32,
    #[sqlx(try_from = "String")]
    pub status: AppointmentStatus,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

impl MedicalAppointment {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        client_id: String,
        animal_id: String,
        veterinarian_id: String,
        appointment_start_time: NaiveDateTime,
        appointment_end_time: NaiveDateTime,
        duration_minutes: i32,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_id,
            animal_id,
            veterinarian_id,
            appointment_start_time,
            appointment_end_time,
            duration_minutes,
            status: AppointmentStatus::Scheduled,
            diagnosis: None,
            treatment: None,
            notes,
        }
    }
}
