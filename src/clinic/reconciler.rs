/// Workflow list reconciliation
///
/// Converts the client's full desired ordered list of workflow steps into
/// the deletes, updates, and inserts that make the persisted table match it
/// exactly. Runs inside a single transaction: any mid-sequence failure
/// rolls everything back and the caller may resubmit the full list.

use crate::clinic::storage::step_from_row;
use crate::clinic::types::{DateTime, StepSpec, WorkflowStep};
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use std::collections::HashSet;
use uuid::Uuid;

/// Reconcile the persisted workflow_steps table against the desired list
///
/// The 0-based position of each step in `steps` is authoritative for the
/// persisted order; advisory order values from the client were already
/// dropped during validation. Semantics:
/// - persisted steps whose id is absent from the input are deleted
/// - steps carrying an id get their label and position updated; an id that
///   matches no row is a silent no-op (zero rows affected, no error)
/// - steps without an id are inserted with a fresh store-assigned id
/// - duplicate input ids are not deduplicated; the last write wins
/// - an empty input clears the table
///
/// Returns the full persisted set re-read in order, all inside the same
/// transaction.
pub async fn reconcile(pool: &SqlitePool, steps: &[StepSpec]) -> Result<Vec<WorkflowStep>> {
    let mut tx = pool.begin().await?;

    let existing: Vec<String> = sqlx::query("SELECT id FROM workflow_steps")
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(|row| row.try_get("id"))
        .collect::<Result<_, sqlx::Error>>()?;

    let incoming_ids: HashSet<&str> = steps.iter().filter_map(|s| s.id.as_deref()).collect();

    for id in existing.iter().filter(|id| !incoming_ids.contains(id.as_str())) {
        sqlx::query("DELETE FROM workflow_steps WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    let now = DateTime::now();
    for (position, step) in steps.iter().enumerate() {
        match &step.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE workflow_steps SET label = ?, sort_order = ?, updated_at = ? WHERE id = ?",
                )
                .bind(&step.label)
                .bind(position as i64)
                .bind(now.to_storage())
                .bind(id)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                sqlx::query(
                    "INSERT INTO workflow_steps (id, label, sort_order, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(Uuid::new_v4().to_string())
                .bind(&step.label)
                .bind(position as i64)
                .bind(now.to_storage())
                .bind(now.to_storage())
                .execute(&mut *tx)
                .await?;
            }
        }
    }

    let rows = sqlx::query("SELECT * FROM workflow_steps ORDER BY sort_order ASC")
        .fetch_all(&mut *tx)
        .await?;
    let result = rows.iter().map(step_from_row).collect::<Result<Vec<_>>>()?;

    tx.commit().await?;

    Ok(result)
}
