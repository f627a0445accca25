/// SQLite persistence gateway for the clinic tables
///
/// Thin typed query/command layer over patients, appointments, and
/// workflow_steps. Store failures surface uninterpreted as anyhow errors;
/// nothing here retries. The multi-statement workflow save is delegated to
/// the reconciler, which owns the transaction.

use crate::clinic::reconciler;
use crate::clinic::types::{
    Appointment, AppointmentFilter, AppointmentPatch, AppointmentStatus, DateTime, Gender,
    NewAppointment, NewPatient, Patient, PatientPatch, StepSpec, WorkflowStep,
};
use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

/// SQLite-backed storage for all three clinic tables
#[derive(Debug, Clone)]
pub struct ClinicStorage {
    /// SQLite connection pool for the clinic database
    pool: SqlitePool,
}

impl ClinicStorage {
    /// Create new storage instance with database connection
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the clinic schema
    ///
    /// Creates the three tables and their indexes. Safe to call multiple
    /// times (uses IF NOT EXISTS). Appointments cascade-delete with their
    /// patient; the pool must have foreign keys enabled for that to apply.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS patients (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT,
                phone TEXT,
                date_of_birth TEXT,
                gender TEXT,
                address TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS appointments (
                id TEXT PRIMARY KEY,
                patient_id TEXT NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
                title TEXT NOT NULL,
                description TEXT,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'scheduled',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS workflow_steps (
                id TEXT PRIMARY KEY,
                label TEXT NOT NULL CHECK (label <> ''),
                sort_order INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Indexes for the hot lookup paths
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_patients_created_at ON patients(created_at)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_appointments_patient_id ON appointments(patient_id)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workflow_steps_order ON workflow_steps(sort_order)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ---- patients ----

    /// Insert a new patient; the store assigns the id and timestamps
    pub async fn create_patient(&self, new: &NewPatient) -> Result<Patient> {
        let id = Uuid::new_v4().to_string();
        let now = DateTime::now();

        sqlx::query(
            r#"
            INSERT INTO patients (id, name, email, phone, date_of_birth, gender, address, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.name)
        .bind(new.email.as_deref())
        .bind(new.phone.as_deref())
        .bind(new.date_of_birth.map(|d| d.to_storage()))
        .bind(new.gender.map(|g| g.to_string()))
        .bind(new.address.as_deref())
        .bind(now.to_storage())
        .bind(now.to_storage())
        .execute(&self.pool)
        .await?;

        Ok(Patient {
            id: id.into(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            date_of_birth: new.date_of_birth,
            gender: new.gender,
            address: new.address.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieve a patient by id
    pub async fn get_patient(&self, id: &str) -> Result<Option<Patient>> {
        let row = sqlx::query("SELECT * FROM patients WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(patient_from_row).transpose()
    }

    /// True when a patient row with this id exists
    pub async fn patient_exists(&self, id: &str) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM patients WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// List one page of patients plus the total match count
    ///
    /// Search, when present, is a case-insensitive substring match against
    /// name OR email OR phone. Results are ordered by creation time
    /// ascending. Page/limit clamping and totalPages math live in the API
    /// layer; this takes a raw limit/offset.
    pub async fn list_patients(
        &self,
        limit: i64,
        offset: i64,
        search: Option<&str>,
    ) -> Result<(Vec<Patient>, i64)> {
        let pattern = search
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s.to_lowercase()));

        let where_clause = if pattern.is_some() {
            " WHERE LOWER(name) LIKE ? OR LOWER(COALESCE(email, '')) LIKE ? OR LOWER(COALESCE(phone, '')) LIKE ?"
        } else {
            ""
        };

        let sql = format!(
            "SELECT * FROM patients{where_clause} ORDER BY created_at ASC LIMIT ? OFFSET ?"
        );
        let mut query = sqlx::query(&sql);
        if let Some(p) = &pattern {
            query = query.bind(p).bind(p).bind(p);
        }
        let rows = query
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) AS n FROM patients{where_clause}");
        let mut count_query = sqlx::query(&count_sql);
        if let Some(p) = &pattern {
            count_query = count_query.bind(p).bind(p).bind(p);
        }
        let total: i64 = count_query.fetch_one(&self.pool).await?.try_get("n")?;

        let patients = rows
            .iter()
            .map(patient_from_row)
            .collect::<Result<Vec<_>>>()?;

        Ok((patients, total))
    }

    /// Apply a partial update to a patient
    ///
    /// `None` fields leave the stored column untouched (COALESCE). Returns
    /// `None` when no row with this id exists. An empty patch returns the
    /// row as-is without bumping updated_at.
    pub async fn update_patient(&self, id: &str, patch: &PatientPatch) -> Result<Option<Patient>> {
        if patch.is_empty() {
            return self.get_patient(id).await;
        }

        let result = sqlx::query(
            r#"
            UPDATE patients SET
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone),
                date_of_birth = COALESCE(?, date_of_birth),
                gender = COALESCE(?, gender),
                address = COALESCE(?, address),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.phone.as_deref())
        .bind(patch.date_of_birth.map(|d| d.to_storage()))
        .bind(patch.gender.map(|g| g.to_string()))
        .bind(patch.address.as_deref())
        .bind(DateTime::now().to_storage())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_patient(id).await
    }

    /// Delete a patient (appointments cascade); returns false when absent
    pub async fn delete_patient(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- appointments ----

    /// Insert a new appointment; the store assigns the id and timestamps
    ///
    /// The referenced patient is checked by the API layer, not here; an
    /// unknown patient_id fails with the store's foreign-key error.
    pub async fn create_appointment(&self, new: &NewAppointment) -> Result<Appointment> {
        let id = Uuid::new_v4().to_string();
        let now = DateTime::now();

        sqlx::query(
            r#"
            INSERT INTO appointments (id, patient_id, title, description, start_time, end_time, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&new.patient_id)
        .bind(&new.title)
        .bind(new.description.as_deref())
        .bind(new.start_time.to_storage())
        .bind(new.end_time.to_storage())
        .bind(new.status.to_string())
        .bind(now.to_storage())
        .bind(now.to_storage())
        .execute(&self.pool)
        .await?;

        Ok(Appointment {
            id: id.into(),
            patient_id: new.patient_id.clone().into(),
            title: new.title.clone(),
            description: new.description.clone(),
            start_time: new.start_time,
            end_time: new.end_time,
            status: new.status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieve an appointment by id
    pub async fn get_appointment(&self, id: &str) -> Result<Option<Appointment>> {
        let row = sqlx::query("SELECT * FROM appointments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(appointment_from_row).transpose()
    }

    /// List appointments matching the filter, ordered by start_time ascending
    ///
    /// Present filters are AND-combined; an empty filter lists everything.
    pub async fn list_appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut binds: Vec<String> = Vec::new();

        if let Some(patient_id) = &filter.patient_id {
            conditions.push("patient_id = ?");
            binds.push(patient_id.clone());
        }
        if let Some(start_date) = filter.start_date {
            conditions.push("start_time >= ?");
            binds.push(start_date.to_storage());
        }
        if let Some(end_date) = filter.end_date {
            conditions.push("end_time <= ?");
            binds.push(end_date.to_storage());
        }

        let mut sql = String::from("SELECT * FROM appointments");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY start_time ASC");

        let mut query = sqlx::query(&sql);
        for bind in &binds {
            query = query.bind(bind);
        }
        let rows = query.fetch_all(&self.pool).await?;

        rows.iter().map(appointment_from_row).collect()
    }

    /// All appointments for one patient, ordered by start_time ascending
    pub async fn appointments_for_patient(&self, patient_id: &str) -> Result<Vec<Appointment>> {
        let rows =
            sqlx::query("SELECT * FROM appointments WHERE patient_id = ? ORDER BY start_time ASC")
                .bind(patient_id)
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(appointment_from_row).collect()
    }

    /// Apply a partial update to an appointment
    ///
    /// Same contract as update_patient: `None` leaves the column untouched,
    /// `None` result means no such row.
    pub async fn update_appointment(
        &self,
        id: &str,
        patch: &AppointmentPatch,
    ) -> Result<Option<Appointment>> {
        let result = sqlx::query(
            r#"
            UPDATE appointments SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                start_time = COALESCE(?, start_time),
                end_time = COALESCE(?, end_time),
                status = COALESCE(?, status),
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.start_time.map(|d| d.to_storage()))
        .bind(patch.end_time.map(|d| d.to_storage()))
        .bind(patch.status.map(|s| s.to_string()))
        .bind(DateTime::now().to_storage())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_appointment(id).await
    }

    /// Delete an appointment; returns false when absent
    pub async fn delete_appointment(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ---- workflow steps ----

    /// All workflow steps, ordered by their persisted position
    pub async fn list_workflow_steps(&self) -> Result<Vec<WorkflowStep>> {
        let rows = sqlx::query("SELECT * FROM workflow_steps ORDER BY sort_order ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(step_from_row).collect()
    }

    /// Replace the persisted workflow with the submitted list
    ///
    /// Runs the reconciler inside a single transaction; see
    /// clinic::reconciler for the exact delete/update/insert semantics.
    pub async fn save_workflow(&self, steps: &[StepSpec]) -> Result<Vec<WorkflowStep>> {
        reconciler::reconcile(&self.pool, steps).await
    }
}

pub(crate) fn patient_from_row(row: &SqliteRow) -> Result<Patient> {
    let gender: Option<String> = row.try_get("gender")?;
    let date_of_birth: Option<String> = row.try_get("date_of_birth")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Patient {
        id: row.try_get::<String, _>("id")?.into(),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        date_of_birth: date_of_birth
            .as_deref()
            .map(DateTime::from_storage)
            .transpose()?,
        gender: gender
            .as_deref()
            .map(|g| g.parse::<Gender>().map_err(anyhow::Error::msg))
            .transpose()?,
        address: row.try_get("address")?,
        created_at: DateTime::from_storage(&created_at)?,
        updated_at: DateTime::from_storage(&updated_at)?,
    })
}

pub(crate) fn appointment_from_row(row: &SqliteRow) -> Result<Appointment> {
    let status: String = row.try_get("status")?;
    let start_time: String = row.try_get("start_time")?;
    let end_time: String = row.try_get("end_time")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Appointment {
        id: row.try_get::<String, _>("id")?.into(),
        patient_id: row.try_get::<String, _>("patient_id")?.into(),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        start_time: DateTime::from_storage(&start_time)?,
        end_time: DateTime::from_storage(&end_time)?,
        status: status
            .parse::<AppointmentStatus>()
            .map_err(anyhow::Error::msg)?,
        created_at: DateTime::from_storage(&created_at)?,
        updated_at: DateTime::from_storage(&updated_at)?,
    })
}

pub(crate) fn step_from_row(row: &SqliteRow) -> Result<WorkflowStep> {
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(WorkflowStep {
        id: row.try_get::<String, _>("id")?.into(),
        label: row.try_get("label")?,
        order: row.try_get("sort_order")?,
        created_at: DateTime::from_storage(&created_at)?,
        updated_at: DateTime::from_storage(&updated_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_storage() -> ClinicStorage {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        let options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await.unwrap();
        let storage = ClinicStorage::new(pool);
        storage.init_schema().await.unwrap();
        storage
    }

    fn make_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: Some("555-010-9999".to_string()),
            date_of_birth: Some(DateTime::from_storage("1980-03-14T00:00:00.000Z").unwrap()),
            gender: Some(Gender::Female),
            address: Some("12 Clinic Street".to_string()),
        }
    }

    fn make_appointment(patient_id: &str, start: &str, end: &str) -> NewAppointment {
        NewAppointment {
            patient_id: patient_id.to_string(),
            title: "Annual Physical".to_string(),
            description: None,
            start_time: DateTime::from_storage(start).unwrap(),
            end_time: DateTime::from_storage(end).unwrap(),
            status: AppointmentStatus::Scheduled,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_patient_verbatim() {
        let storage = test_storage().await;
        let created = storage.create_patient(&make_patient("Ada")).await.unwrap();

        let found = storage.get_patient(&created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Ada");
        assert_eq!(found.email.as_deref(), Some("ada@example.com"));
        assert_eq!(found.phone.as_deref(), Some("555-010-9999"));
        assert_eq!(found.gender, Some(Gender::Female));
        assert_eq!(found.address.as_deref(), Some("12 Clinic Street"));
        assert_eq!(found.date_of_birth, created.date_of_birth);
        assert_eq!(found.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_patient_unchanged() {
        let storage = test_storage().await;
        let created = storage.create_patient(&make_patient("Bea")).await.unwrap();

        let updated = storage
            .update_patient(&created.id, &PatientPatch::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, created.name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_patch_updates_only_provided_fields() {
        let storage = test_storage().await;
        let created = storage.create_patient(&make_patient("Cleo")).await.unwrap();

        let patch = PatientPatch {
            phone: Some("555-333-2222".to_string()),
            ..Default::default()
        };
        let updated = storage
            .update_patient(&created.id, &patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.phone.as_deref(), Some("555-333-2222"));
        assert_eq!(updated.name, "Cleo");
        assert_eq!(updated.email, created.email);
    }

    #[tokio::test]
    async fn test_update_missing_patient_returns_none() {
        let storage = test_storage().await;
        let patch = PatientPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        let result = storage.update_patient("no-such-id", &patch).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_patient() {
        let storage = test_storage().await;
        let created = storage.create_patient(&make_patient("Dot")).await.unwrap();

        assert!(storage.delete_patient(&created.id).await.unwrap());
        assert!(storage.get_patient(&created.id).await.unwrap().is_none());
        assert!(!storage.delete_patient(&created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_patient_pagination_counts() {
        let storage = test_storage().await;
        for i in 0..25 {
            storage
                .create_patient(&make_patient(&format!("Patient{i:02}")))
                .await
                .unwrap();
        }

        let (page1, total) = storage.list_patients(10, 0, None).await.unwrap();
        assert_eq!(page1.len(), 10);
        assert_eq!(total, 25);

        // Page 4 at limit 10 is past the end but keeps the full count
        let (page4, total) = storage.list_patients(10, 30, None).await.unwrap();
        assert!(page4.is_empty());
        assert_eq!(total, 25);
    }

    #[tokio::test]
    async fn test_patient_search_is_case_insensitive_over_three_fields() {
        let storage = test_storage().await;
        storage.create_patient(&make_patient("Erik")).await.unwrap();
        storage
            .create_patient(&NewPatient {
                phone: Some("555-777-1234".to_string()),
                email: None,
                ..make_patient("Frida")
            })
            .await
            .unwrap();

        let (by_name, total) = storage.list_patients(10, 0, Some("ERIK")).await.unwrap();
        assert_eq!(total, 1);
        assert_eq!(by_name[0].name, "Erik");

        let (by_email, _) = storage
            .list_patients(10, 0, Some("erik@example"))
            .await
            .unwrap();
        assert_eq!(by_email.len(), 1);

        let (by_phone, _) = storage.list_patients(10, 0, Some("777-1234")).await.unwrap();
        assert_eq!(by_phone[0].name, "Frida");

        let (none, total) = storage.list_patients(10, 0, Some("zzz")).await.unwrap();
        assert!(none.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_appointment_date_filters_are_independent() {
        let storage = test_storage().await;
        let patient = storage.create_patient(&make_patient("Gus")).await.unwrap();

        storage
            .create_appointment(&make_appointment(
                &patient.id,
                "2026-03-01T09:00:00.000Z",
                "2026-03-01T10:00:00.000Z",
            ))
            .await
            .unwrap();
        storage
            .create_appointment(&make_appointment(
                &patient.id,
                "2026-03-10T09:00:00.000Z",
                "2026-03-10T10:00:00.000Z",
            ))
            .await
            .unwrap();

        // startDate alone ignores end times entirely
        let filter = AppointmentFilter {
            start_date: Some(DateTime::from_storage("2026-03-05T00:00:00.000Z").unwrap()),
            ..Default::default()
        };
        let after = storage.list_appointments(&filter).await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(
            after[0].start_time.to_storage(),
            "2026-03-10T09:00:00.000Z"
        );

        let filter = AppointmentFilter {
            end_date: Some(DateTime::from_storage("2026-03-05T00:00:00.000Z").unwrap()),
            ..Default::default()
        };
        let before = storage.list_appointments(&filter).await.unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].end_time.to_storage(), "2026-03-01T10:00:00.000Z");

        let filter = AppointmentFilter {
            patient_id: Some(patient.id.to_string()),
            ..Default::default()
        };
        let all = storage.list_appointments(&filter).await.unwrap();
        assert_eq!(all.len(), 2);
        // Ordered by start_time ascending
        assert!(all[0].start_time <= all[1].start_time);
    }

    #[tokio::test]
    async fn test_deleting_patient_cascades_to_appointments() {
        let storage = test_storage().await;
        let patient = storage.create_patient(&make_patient("Hana")).await.unwrap();
        storage
            .create_appointment(&make_appointment(
                &patient.id,
                "2026-04-01T09:00:00.000Z",
                "2026-04-01T10:00:00.000Z",
            ))
            .await
            .unwrap();

        assert!(storage.delete_patient(&patient.id).await.unwrap());

        let remaining = storage
            .list_appointments(&AppointmentFilter::default())
            .await
            .unwrap();
        assert!(remaining.is_empty());
    }

    #[tokio::test]
    async fn test_appointment_patch_and_delete() {
        let storage = test_storage().await;
        let patient = storage.create_patient(&make_patient("Ivan")).await.unwrap();
        let appt = storage
            .create_appointment(&make_appointment(
                &patient.id,
                "2026-05-01T09:00:00.000Z",
                "2026-05-01T10:00:00.000Z",
            ))
            .await
            .unwrap();

        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Completed),
            ..Default::default()
        };
        let updated = storage
            .update_appointment(&appt.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, AppointmentStatus::Completed);
        assert_eq!(updated.title, "Annual Physical");

        assert!(storage.delete_appointment(&appt.id).await.unwrap());
        assert!(!storage.delete_appointment(&appt.id).await.unwrap());
    }
}
