/// Appointment queries and mutations
///
/// Date filters are independent optional predicates (startDate narrows on
/// start_time, endDate on end_time); creating an appointment verifies the
/// referenced patient exists before touching the appointments table.

use crate::clinic::types::{
    Appointment, AppointmentFilter, AppointmentStatus, DateTime, Patient,
};
use crate::clinic::ClinicStorage;
use crate::graphql::cache::{self, QueryCache};
use crate::graphql::errors::{bad_input, not_found, store_error};
use crate::graphql::validate;
use async_graphql::{ComplexObject, Context, InputObject, Object, Result, ID};
use serde_json::json;

#[derive(Debug, InputObject)]
pub struct CreateAppointmentInput {
    pub patient_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub status: Option<AppointmentStatus>,
}

#[derive(Debug, InputObject)]
pub struct UpdateAppointmentInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub status: Option<AppointmentStatus>,
}

#[ComplexObject]
impl Appointment {
    /// The owning patient, resolved on demand
    async fn patient(&self, ctx: &Context<'_>) -> Result<Patient> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        storage
            .get_patient(&self.patient_id)
            .await
            .map_err(|e| store_error("resolve appointment patient", e))?
            .ok_or_else(|| not_found("Patient not found"))
    }
}

#[derive(Default)]
pub struct AppointmentQuery;

#[Object]
impl AppointmentQuery {
    /// Appointments matching the optional AND-combined filters, ordered by
    /// start time ascending
    async fn appointments(
        &self,
        ctx: &Context<'_>,
        start_date: Option<DateTime>,
        end_date: Option<DateTime>,
        patient_id: Option<ID>,
    ) -> Result<Vec<Appointment>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let filter = AppointmentFilter {
            start_date,
            end_date,
            patient_id: patient_id.map(|id| id.to_string()),
        };

        let args = json!({
            "startDate": filter.start_date.map(|d| d.to_storage()),
            "endDate": filter.end_date.map(|d| d.to_storage()),
            "patientId": filter.patient_id.as_deref(),
        });
        if let Some(hit) = query_cache.get("appointments", &args).await {
            return Ok(serde_json::from_value(hit)?);
        }

        let appointments = storage
            .list_appointments(&filter)
            .await
            .map_err(|e| store_error("list appointments", e))?;

        query_cache
            .put(
                "appointments",
                &args,
                cache::APPOINTMENTS,
                serde_json::to_value(&appointments)?,
            )
            .await;

        Ok(appointments)
    }

    /// A single appointment, or null when the id is unknown
    async fn appointment(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Appointment>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        storage
            .get_appointment(&id)
            .await
            .map_err(|e| store_error("get appointment", e))
    }
}

#[derive(Default)]
pub struct AppointmentMutation;

#[Object]
impl AppointmentMutation {
    async fn create_appointment(
        &self,
        ctx: &Context<'_>,
        input: CreateAppointmentInput,
    ) -> Result<Appointment> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let new = validate::validate_create_appointment(input).map_err(bad_input)?;

        // Referenced patient must exist; the API layer owns this check
        let exists = storage
            .patient_exists(&new.patient_id)
            .await
            .map_err(|e| store_error("check patient", e))?;
        if !exists {
            return Err(not_found("Patient not found"));
        }

        let appointment = storage
            .create_appointment(&new)
            .await
            .map_err(|e| store_error("create appointment", e))?;

        query_cache.invalidate(cache::APPOINTMENTS).await;
        tracing::info!(
            "Created appointment {} for patient {}",
            appointment.id.as_str(),
            appointment.patient_id.as_str()
        );

        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateAppointmentInput,
    ) -> Result<Appointment> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let patch = validate::validate_update_appointment(input).map_err(bad_input)?;
        let updated = storage
            .update_appointment(&id, &patch)
            .await
            .map_err(|e| store_error("update appointment", e))?;

        match updated {
            Some(appointment) => {
                query_cache.invalidate(cache::APPOINTMENTS).await;
                Ok(appointment)
            }
            None => Err(not_found("Appointment not found")),
        }
    }

    async fn delete_appointment(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let deleted = storage
            .delete_appointment(&id)
            .await
            .map_err(|e| store_error("delete appointment", e))?;

        if !deleted {
            return Err(not_found("Appointment not found"));
        }

        query_cache.invalidate(cache::APPOINTMENTS).await;
        tracing::info!("Deleted appointment {}", id.as_str());

        Ok(true)
    }
}
