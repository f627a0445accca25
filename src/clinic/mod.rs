/// Clinic domain layer
///
/// This module owns the persisted entities and the persistence gateway:
/// - Type definitions (Patient, Appointment, WorkflowStep, patch types)
/// - SQLite persistence with sqlx
/// - Workflow list reconciliation inside a single transaction

// Core clinic type definitions
pub mod types;

// SQLite persistence gateway for the three clinic tables
pub mod storage;

// Transactional workflow list reconciliation
pub mod reconciler;

// Re-export commonly used types
pub use storage::ClinicStorage;
pub use types::{Appointment, AppointmentStatus, Gender, Patient, WorkflowStep};
