/// Patient queries and mutations
///
/// Owns input validation and error shaping for the patient entity, plus
/// the lazy `appointments` field on the Patient object.

use crate::clinic::types::{Appointment, DateTime, Gender, Patient};
use crate::clinic::ClinicStorage;
use crate::graphql::cache::{self, QueryCache};
use crate::graphql::errors::{bad_input, not_found, store_error};
use crate::graphql::validate;
use async_graphql::{ComplexObject, Context, InputObject, Object, Result, SimpleObject, ID};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One page of patients plus paging metadata
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedPatients {
    pub data: Vec<Patient>,
    pub total: i64,
    pub page: i32,
    pub limit: i32,
    pub total_pages: i64,
}

#[derive(Debug, InputObject)]
pub struct CreatePatientInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct UpdatePatientInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
}

#[ComplexObject]
impl Patient {
    /// This patient's appointments, resolved on demand, ordered by start time
    async fn appointments(&self, ctx: &Context<'_>) -> Result<Vec<Appointment>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        storage
            .appointments_for_patient(&self.id)
            .await
            .map_err(|e| store_error("resolve patient appointments", e))
    }
}

#[derive(Default)]
pub struct PatientQuery;

#[Object]
impl PatientQuery {
    /// One page of patients, optionally narrowed by a search term matching
    /// name, email, or phone (case-insensitive substring)
    async fn patients(
        &self,
        ctx: &Context<'_>,
        page: Option<i32>,
        limit: Option<i32>,
        search: Option<String>,
    ) -> Result<PaginatedPatients> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(10).clamp(1, 100);
        let offset = i64::from(page - 1) * i64::from(limit);

        let args = json!({ "page": page, "limit": limit, "search": search.as_deref() });
        if let Some(hit) = query_cache.get("patients", &args).await {
            return Ok(serde_json::from_value(hit)?);
        }

        let (data, total) = storage
            .list_patients(i64::from(limit), offset, search.as_deref())
            .await
            .map_err(|e| store_error("list patients", e))?;

        let result = PaginatedPatients {
            data,
            total,
            page,
            limit,
            total_pages: (total + i64::from(limit) - 1) / i64::from(limit),
        };
        query_cache
            .put("patients", &args, cache::PATIENTS, serde_json::to_value(&result)?)
            .await;

        Ok(result)
    }

    /// A single patient, or null when the id is unknown
    async fn patient(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Patient>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        storage
            .get_patient(&id)
            .await
            .map_err(|e| store_error("get patient", e))
    }
}

#[derive(Default)]
pub struct PatientMutation;

#[Object]
impl PatientMutation {
    async fn create_patient(
        &self,
        ctx: &Context<'_>,
        input: CreatePatientInput,
    ) -> Result<Patient> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let new = validate::validate_create_patient(input).map_err(bad_input)?;
        let patient = storage
            .create_patient(&new)
            .await
            .map_err(|e| store_error("create patient", e))?;

        query_cache.invalidate(cache::PATIENTS).await;
        tracing::info!("Created patient {} ({})", patient.id.as_str(), patient.name);

        Ok(patient)
    }

    async fn update_patient(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdatePatientInput,
    ) -> Result<Patient> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let patch = validate::validate_update_patient(input).map_err(bad_input)?;
        let updated = storage
            .update_patient(&id, &patch)
            .await
            .map_err(|e| store_error("update patient", e))?;

        match updated {
            Some(patient) => {
                query_cache.invalidate(cache::PATIENTS).await;
                Ok(patient)
            }
            None => Err(not_found("Patient not found")),
        }
    }

    async fn delete_patient(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let deleted = storage
            .delete_patient(&id)
            .await
            .map_err(|e| store_error("delete patient", e))?;

        if !deleted {
            return Err(not_found("Patient not found"));
        }

        // Appointments cascade with their patient
        query_cache.invalidate(cache::PATIENTS).await;
        query_cache.invalidate(cache::APPOINTMENTS).await;
        tracing::info!("Deleted patient {}", id.as_str());

        Ok(true)
    }
}
