//! Patient repository for CRUD operations on patient records.

use crate::Result as DbErrorResult;

use mn_core::{NewPatient, Patient};

use sqlx::SqlitePool;

const PATIENT_COLUMNS: &str = "id, name, age, gender, contact, diagnosis, last_visit, notes";

pub struct PatientRepository {
    pool: SqlitePool,
}

impl PatientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, patient: &NewPatient) -> DbErrorResult<Patient> {
        let result = sqlx::query(
            r#"
                INSERT INTO patients (name, age, gender, contact, diagnosis, last_visit, notes)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(&patient.contact)
        .bind(&patient.diagnosis)
        .bind(patient.last_visit)
        .bind(&patient.notes)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        let row = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Patient>> {
        let row = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Patient>> {
        let rows = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Full-record update; returns the stored row, or None when the id
    /// does not exist.
    pub async fn update(&self, id: i64, patient: &NewPatient) -> DbErrorResult<Option<Patient>> {
        let result = sqlx::query(
            r#"
                UPDATE patients
                SET name = ?, age = ?, gender = ?, contact = ?,
                    diagnosis = ?, last_visit = ?, notes = ?
                WHERE id = ?
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(&patient.gender)
        .bind(&patient.contact)
        .bind(&patient.diagnosis)
        .bind(patient.last_visit)
        .bind(&patient.notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Returns false when the id does not exist.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: i64) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}
