/// Core clinic type definitions
///
/// Defines the three persisted entities (Patient, Appointment, WorkflowStep),
/// their enums, and the explicit patch types used for partial updates.
/// These types double as the GraphQL object types, since resolvers return
/// stored rows directly.

use async_graphql::{Enum, SimpleObject, ID};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// UTC timestamp carried on the wire as an ISO-8601 string
///
/// Newtype over chrono so the GraphQL scalar coercion (graphql::scalars) and
/// the storage text format live in one place. Stored with fixed millisecond
/// precision and a `Z` suffix so lexicographic comparison of stored text
/// matches chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime(pub chrono::DateTime<Utc>);

impl DateTime {
    /// Current time
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Fixed-width RFC-3339 text used for storage and range comparisons
    pub fn to_storage(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parse the storage text format (any RFC-3339 offset is normalized to UTC)
    pub fn from_storage(s: &str) -> Result<Self, chrono::ParseError> {
        chrono::DateTime::parse_from_rfc3339(s).map(|dt| Self(dt.with_timezone(&Utc)))
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(dt: chrono::DateTime<Utc>) -> Self {
        Self(dt)
    }
}

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[graphql(rename_items = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{other}'")),
        }
    }
}

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Enum)]
#[graphql(rename_items = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Initial status for newly created appointments
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("unknown appointment status '{other}'")),
        }
    }
}

/// A clinic patient
///
/// Owns zero or more appointments; deleting a patient cascades to them.
/// The `appointments` GraphQL field is resolved lazily in graphql::patients.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: ID,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// An appointment for exactly one patient
///
/// No invariant relates end_time to start_time. The `patient` GraphQL field
/// is resolved lazily in graphql::appointments.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: ID,
    pub patient_id: ID,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// One step in the clinic's configured workflow
///
/// `order` is reassigned on every save to the step's position in the
/// submitted list; it is never trusted from client input.
#[derive(Debug, Clone, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: ID,
    pub label: String,
    pub order: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// Validated fields for inserting a patient
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
}

/// Partial update for a patient: `None` means "leave unchanged"
///
/// A stored value can never be cleared through a patch; this matches the
/// source system, which dropped null fields before updating.
#[derive(Debug, Clone, Default)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<DateTime>,
    pub gender: Option<Gender>,
    pub address: Option<String>,
}

impl PatientPatch {
    /// True when no field is set (the update is a timestamp-only no-op)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
            && self.address.is_none()
    }
}

/// Validated fields for inserting an appointment
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub status: AppointmentStatus,
}

/// Partial update for an appointment: `None` means "leave unchanged"
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime>,
    pub end_time: Option<DateTime>,
    pub status: Option<AppointmentStatus>,
}

/// Optional date-range / patient filters for listing appointments
///
/// Each filter is an independent predicate; present filters are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    /// Keep appointments whose start_time >= this
    pub start_date: Option<DateTime>,
    /// Keep appointments whose end_time <= this
    pub end_date: Option<DateTime>,
    /// Keep appointments for exactly this patient
    pub patient_id: Option<String>,
}

/// One desired workflow step, as submitted by the client
///
/// A step with an id refers to a persisted row; a step without one is new.
/// The client's advisory `order` value is dropped during validation -- the
/// position in the submitted list is what gets persisted.
#[derive(Debug, Clone)]
pub struct StepSpec {
    pub id: Option<String>,
    pub label: String,
}
