//! Prescription repository.

use crate::Result as DbErrorResult;

use mn_core::{NewPrescription, Prescription};

use sqlx::SqlitePool;

const PRESCRIPTION_COLUMNS: &str = "id, patient_id, diagnosis, prescription_date, \
     valid_until, doctor_notes, medications_json";

pub struct PrescriptionRepository {
    pool: SqlitePool,
}

impl PrescriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, prescription: &NewPrescription) -> DbErrorResult<Prescription> {
        let result = sqlx::query(
            r#"
                INSERT INTO prescriptions (
                    patient_id, diagnosis, prescription_date,
                    valid_until, doctor_notes, medications_json
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(prescription.patient_id)
        .bind(&prescription.diagnosis)
        .bind(prescription.prescription_date)
        .bind(prescription.valid_until)
        .bind(&prescription.doctor_notes)
        .bind(&prescription.medications_json)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        let row = sqlx::query_as::<_, Prescription>(&format!(
            "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Prescription>> {
        let rows = sqlx::query_as::<_, Prescription>(&format!(
            "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_patient(&self, patient_id: i64) -> DbErrorResult<Vec<Prescription>> {
        let rows = sqlx::query_as::<_, Prescription>(&format!(
            "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE patient_id = ? ORDER BY id"
        ))
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
