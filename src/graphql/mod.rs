/// GraphQL API layer
///
/// Translates client requests into persistence-gateway calls. Owns input
/// validation, error shaping, the DateTime scalar, and the list-query
/// cache. One resolver module per entity, merged into the schema roots.

// API error taxonomy and GraphQL error shaping
pub mod errors;

// DateTime scalar coercion
pub mod scalars;

// Per-input validation functions
pub mod validate;

// List-query result cache with collection invalidation
pub mod cache;

// Patient queries/mutations and the Patient.appointments field
pub mod patients;

// Appointment queries/mutations and the Appointment.patient field
pub mod appointments;

// Workflow step query and saveWorkflow mutation
pub mod workflow;

use crate::clinic::ClinicStorage;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use cache::QueryCache;

/// Root query object merging the per-entity query resolvers
#[derive(MergedObject, Default)]
pub struct QueryRoot(
    patients::PatientQuery,
    appointments::AppointmentQuery,
    workflow::WorkflowQuery,
);

/// Root mutation object merging the per-entity mutation resolvers
#[derive(MergedObject, Default)]
pub struct MutationRoot(
    patients::PatientMutation,
    appointments::AppointmentMutation,
    workflow::WorkflowMutation,
);

/// The executable clinic schema
pub type ClinicSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with storage and cache available to every resolver
pub fn build_schema(storage: ClinicStorage, query_cache: QueryCache) -> ClinicSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(storage)
        .data(query_cache)
        .finish()
}
