/// Workflow step query and save mutation
///
/// saveWorkflow takes the full desired ordered list and hands it to the
/// reconciler; the response is the complete persisted set in order.

use crate::clinic::types::WorkflowStep;
use crate::clinic::ClinicStorage;
use crate::graphql::cache::{self, QueryCache};
use crate::graphql::errors::{bad_input, store_error};
use crate::graphql::validate;
use async_graphql::{Context, InputObject, Object, Result, ID};
use serde_json::json;

#[derive(Debug, InputObject)]
pub struct SaveWorkflowInput {
    pub steps: Vec<WorkflowStepInput>,
}

/// One desired step: an id references a persisted row, no id means new.
/// The submitted order is advisory; list position wins.
#[derive(Debug, InputObject)]
pub struct WorkflowStepInput {
    pub id: Option<ID>,
    pub label: String,
    pub order: i32,
}

#[derive(Default)]
pub struct WorkflowQuery;

#[Object]
impl WorkflowQuery {
    /// All workflow steps, ordered by their persisted position
    async fn workflow_steps(&self, ctx: &Context<'_>) -> Result<Vec<WorkflowStep>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let args = json!({});
        if let Some(hit) = query_cache.get("workflowSteps", &args).await {
            return Ok(serde_json::from_value(hit)?);
        }

        let steps = storage
            .list_workflow_steps()
            .await
            .map_err(|e| store_error("list workflow steps", e))?;

        query_cache
            .put(
                "workflowSteps",
                &args,
                cache::WORKFLOW_STEPS,
                serde_json::to_value(&steps)?,
            )
            .await;

        Ok(steps)
    }
}

#[derive(Default)]
pub struct WorkflowMutation;

#[Object]
impl WorkflowMutation {
    /// Replace the persisted workflow with the submitted ordered list
    async fn save_workflow(
        &self,
        ctx: &Context<'_>,
        input: SaveWorkflowInput,
    ) -> Result<Vec<WorkflowStep>> {
        let storage = ctx.data_unchecked::<ClinicStorage>();
        let query_cache = ctx.data_unchecked::<QueryCache>();

        let specs = validate::validate_save_workflow(input).map_err(bad_input)?;
        let steps = storage
            .save_workflow(&specs)
            .await
            .map_err(|e| store_error("save workflow", e))?;

        query_cache.invalidate(cache::WORKFLOW_STEPS).await;
        tracing::info!("Saved workflow with {} steps", steps.len());

        Ok(steps)
    }
}
