use chrono::NaiveDateTime;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::appointments::models::MedicalAppointment;

const APPOINTMENT_COLUMNS: &str = "id, client_id, animal_id, veterinarian_id, \
     appointment_start_time, appointment_end_time, duration_minutes, status, diagnosis, \
     treatment, notes";

/// MySQL persistence for medical appointments
pub struct AppointmentRepository {
    pool: MySqlPool,
}

impl AppointmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<MedicalAppointment>> {
        let appointment = sqlx::query_as::<_, MedicalAppointment>(&format!(
            "SELECT {} FROM medical_appointments WHERE id = ?",
            APPOINTMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(appointment)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<MedicalAppointment>> {
        let appointments = sqlx::query_as::<_, MedicalAppointment>(&format!(
            "SELECT {} FROM medical_appointments ORDER BY appointment_start_time \
             LIMIT ? OFFSET ?",
            APPOINTMENT_COLUMNS
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    pub async fn search_by_veterinarian_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalAppointment>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let appointments = sqlx::query_as::<_, MedicalAppointment>(&format!(
            "SELECT a.{} FROM medical_appointments a \
             JOIN veterinarians v ON v.id = a.veterinarian_id \
             WHERE LOWER(v.name) LIKE ? ORDER BY a.appointment_start_time LIMIT ? OFFSET ?",
            APPOINTMENT_COLUMNS.replace(", ", ", a.")
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    pub async fn search_by_client_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalAppointment>> {
        let pattern = format!("%{}%", name.to_lowercase());
        let appointments = sqlx::query_as::<_, MedicalAppointment>(&format!(
            "SELECT a.{} FROM medical_appointments a \
             JOIN clients c ON c.id = a.client_id \
             WHERE LOWER(c.name) LIKE ? ORDER BY a.appointment_start_time LIMIT ? OFFSET ?",
            APPOINTMENT_COLUMNS.replace(", ", ", a.")
        ))
        .bind(pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    /// Any SCHEDULED appointment for the veterinarian whose half-open
    /// `[start, end)` interval overlaps the given one. `exclude_id` keeps an
    /// appointment from conflicting with itself during updates.
    pub async fn exists_conflicting(
        &self,
        veterinarian_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<&str>,
    ) -> Result<bool> {
        let count = match exclude_id {
            Some(exclude_id) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM medical_appointments \
                     WHERE veterinarian_id = ? AND status = 'SCHEDULED' \
                     AND appointment_start_time < ? AND ? < appointment_end_time AND id <> ?",
                )
                .bind(veterinarian_id)
                .bind(end)
                .bind(start)
                .bind(exclude_id)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM medical_appointments \
                     WHERE veterinarian_id = ? AND status = 'SCHEDULED' \
                     AND appointment_start_time < ? AND ? < appointment_end_time",
                )
                .bind(veterinarian_id)
                .bind(end)
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(count > 0)
    }

    pub async fn exists_by_veterinarian(&self, veterinarian_id: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM medical_appointments WHERE veterinarian_id = ?",
        )
        .bind(veterinarian_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn insert(&self, appointment: &MedicalAppointment) -> Result<()> {
        sqlx::query(
            "INSERT INTO medical_appointments (id, client_id, animal_id, veterinarian_id, \
             appointment_start_time, appointment_end_time, duration_minutes, status, \
             diagnosis, treatment, notes) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&appointment.id)
        .bind(&appointment.client_id)
        .bind(&appointment.animal_id)
        .bind(&appointment.veterinarian_id)
        .bind(appointment.appointment_start_time)
        .bind(appointment.appointment_end_time)
        .bind(appointment.duration_minutes)
        .bind(appointment.status.as_str())
        .bind(&appointment.diagnosis)
        .bind(&appointment.treatment)
        .bind(&appointment.notes)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn update(&self, appointment: &MedicalAppointment) -> Result<()> {
        sqlx::query(
            "UPDATE medical_appointments SET client_id = ?, animal_id = ?, \
             veterinarian_id = ?, appointment_start_time = ?, appointment_end_time = ?, \
             duration_minutes = ?, status = ?, diagnosis = ?, treatment = ?, notes = ? \
             WHERE id = ?",
        )
        .bind(&appointment.client_id)
        .bind(&appointment.animal_id)
        .bind(&appointment.veterinarian_id)
        .bind(appointment.appointment_start_time)
        .bind(appointment.appointment_end_time)
        .bind(appointment.duration_minutes)
        .bind(appointment.status.as_str())
        .bind(&appointment.diagnosis)
        .bind(&appointment.treatment)
        .bind(&appointment.notes)
        .bind(&appointment.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM medical_appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
