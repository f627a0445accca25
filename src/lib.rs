/// Clinica: clinic management backend
///
/// This library provides a GraphQL API over a SQLite store for patients,
/// appointments, and a configurable ordered list of workflow steps.

// Core configuration and setup
pub mod config;

// Clinic domain layer - entity types, SQLite persistence, workflow reconciliation
pub mod clinic;

// GraphQL API layer - schema, resolvers, validation, error shaping, query cache
pub mod graphql;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use clinic::{Appointment, AppointmentStatus, ClinicStorage, Gender, Patient, WorkflowStep};
pub use graphql::{build_schema, ClinicSchema};
pub use server::start_server;
