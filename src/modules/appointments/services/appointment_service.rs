use chrono::NaiveDateTime;
use sqlx::MySqlPool;
use tracing::info;

use crate::core::{require, AppError, Result};
use crate::modules::animals::repositories::AnimalRepository;
use crate::modules::appointments::models::{AppointmentStatus, MedicalAppointment};
use crate::modules::appointments::repositories::AppointmentRepository;
use crate::modules::appointments::services::AppointmentTimeRules;
use crate::modules::clients::repositories::ClientRepository;
use crate::modules::veterinarians::repositories::VeterinarianRepository;

#[derive(Debug, Clone)]
pub struct CreateAppointmentInput {
    pub client_id: String,
    pub animal_id: String,
    pub veterinarian_id: String,
    pub appointment_start_time: NaiveDateTime,
    pub duration_minutes: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAppointmentInput {
    pub client_id: Option<String>,
    pub animal_id: Option<String>,
    pub veterinarian_id: Option<String>,
    pub appointment_start_time: Option<NaiveDateTime>,
    pub duration_minutes: Option<i32>,
    pub status: Option<AppointmentStatus>,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

/// Scheduling logic for medical appointments
pub struct AppointmentService {
    repository: AppointmentRepository,
    clients: ClientRepository,
    animals: AnimalRepository,
    veterinarians: VeterinarianRepository,
}

impl AppointmentService {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            repository: AppointmentRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            animals: AnimalRepository::new(pool.clone()),
            veterinarians: VeterinarianRepository::new(pool),
        }
    }

    pub async fn get_appointment(&self, id: &str) -> Result<MedicalAppointment> {
        require(
            self.repository.find_by_id(id).await?,
            "Medical Appointment",
            &id,
        )
    }

    pub async fn list_appointments(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalAppointment>> {
        self.repository.list(limit, offset).await
    }

    pub async fn search_by_veterinarian_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalAppointment>> {
        self.repository
            .search_by_veterinarian_name(name, limit, offset)
            .await
    }

    pub async fn search_by_client_name(
        &self,
        name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MedicalAppointment>> {
        self.repository
            .search_by_client_name(name, limit, offset)
            .await
    }

    pub async fn create_appointment(
        &self,
        input: CreateAppointmentInput,
    ) -> Result<MedicalAppointment> {
        if let Some(duration) = input.duration_minutes {
            if duration <= 0 {
                return Err(AppError::validation("The duration needs to be positive"));
            }
        }

        let start = input.appointment_start_time;
        let end = AppointmentTimeRules::end(start, input.duration_minutes);
        self.ensure_slot_is_free(&input.veterinarian_id, start, end, None)
            .await?;

        require(
            self.clients.find_by_id(&input.client_id).await?,
            "Client",
            &input.client_id,
        )?;
        require(
            self.animals.find_by_id(&input.animal_id).await?,
            "Animal",
            &input.animal_id,
        )?;
        require(
            self.veterinarians.find_by_id(&input.veterinarian_id).await?,
            "Veterinarian",
            &input.veterinarian_id,
        )?;

        let duration =
            AppointmentTimeRules::resolve_duration(input.duration_minutes, super::DEFAULT_DURATION_MINUTES);
        let appointment = MedicalAppointment::new(
            input.client_id,
            input.animal_id,
            input.veterinarian_id,
            start,
            end,
            duration,
            input.notes,
        );
        self.repository.insert(&appointment).await?;

        info!(
            appointment_id = %appointment.id,
            veterinarian_id = %appointment.veterinarian_id,
            start = %appointment.appointment_start_time,
            "Scheduled medical appointment"
        );
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        input: UpdateAppointmentInput,
    ) -> Result<MedicalAppointment> {
        let mut appointment = self.get_appointment(id).await?;

        if let Some(client_id) = input.client_id {
            require(self.clients.find_by_id(&client_id).await?, "Client", &client_id)?;
            appointment.client_id = client_id;
        }
        if let Some(animal_id) = input.animal_id {
            require(self.animals.find_by_id(&animal_id).await?, "Animal", &animal_id)?;
            appointment.animal_id = animal_id;
        }
        if let Some(veterinarian_id) = input.veterinarian_id {
            require(
                self.veterinarians.find_by_id(&veterinarian_id).await?,
                "Veterinarian",
                &veterinarian_id,
            )?;
            appointment.veterinarian_id = veterinarian_id;
        }

        if input.appointment_start_time.is_some() || input.duration_minutes.is_some() {
            if let Some(duration) = input.duration_minutes {
                if duration <= 0 {
                    return Err(AppError::validation("The duration needs to be positive"));
                }
            }

            let start = AppointmentTimeRules::resolve_start(
                input.appointment_start_time,
                appointment.appointment_start_time,
            );
            let duration = AppointmentTimeRules::resolve_duration(
                input.duration_minutes,
                appointment.duration_minutes,
            );
            let end = AppointmentTimeRules::end(start, Some(duration));

            self.ensure_slot_is_free(
                &appointment.veterinarian_id,
                start,
                end,
                Some(appointment.id.as_str()),
            )
            .await?;

            appointment.appointment_start_time = start;
            appointment.appointment_end_time = end;
            appointment.duration_minutes = duration;
        }

        if let Some(status) = input.status {
            appointment.status = status;
        }
        if let Some(diagnosis) = input.diagnosis {
            appointment.diagnosis = Some(diagnosis);
        }
        if let Some(treatment) = input.treatment {
            appointment.treatment = Some(treatment);
        }
        if let Some(notes) = input.notes {
            appointment.notes = Some(notes);
        }

        self.repository.update(&appointment).await?;
        Ok(appointment)
    }

    pub async fn delete_appointment(&self, id: &str) -> Result<()> {
        let appointment = self.get_appointment(id).await?;

        if appointment.status != AppointmentStatus::Scheduled {
            return Err(AppError::business(
                "Only appointments with status SCHEDULED can be deleted",
            ));
        }

        self.repository.delete(id).await
    }

    async fn ensure_slot_is_free(
        &self,
        veterinarian_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_id: Option<&str>,
    ) -> Result<()> {
        let has_conflict = self
            .repository
            .exists_conflicting(veterinarian_id, start, end, exclude_id)
            .await?;

        if has_conflict {
            return Err(AppError::business(
                "This time slot is already booked for this veterinarian",
            ));
        }

        Ok(())
    }
}
