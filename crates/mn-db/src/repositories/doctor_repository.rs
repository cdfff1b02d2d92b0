//! Doctor repository - the identity store behind the auth boundary.
//!
//! Accounts are deactivated via `is_active`, never deleted; every lookup
//! used by login filters on the active flag.

use crate::Result as DbErrorResult;

use mn_core::{Doctor, NewDoctor};

use chrono::Utc;
use sqlx::SqlitePool;

const DOCTOR_COLUMNS: &str = "id, name, email, password_hash, specialization, \
     phone_number, license_number, is_active, created_at";

pub struct DoctorRepository {
    pool: SqlitePool,
}

impl DoctorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new doctor and return the stored row.
    ///
    /// A duplicate email surfaces as [`crate::DbError::UniqueViolation`]
    /// from the unique index, which callers treat as the authoritative
    /// duplicate-registration signal.
    pub async fn create(&self, doctor: &NewDoctor) -> DbErrorResult<Doctor> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO doctors (
                    name, email, password_hash, specialization,
                    phone_number, license_number, is_active, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(&doctor.name)
        .bind(&doctor.email)
        .bind(&doctor.password_hash)
        .bind(&doctor.specialization)
        .bind(&doctor.phone_number)
        .bind(&doctor.license_number)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        let row = sqlx::query_as::<_, Doctor>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Doctor>> {
        let row = sqlx::query_as::<_, Doctor>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Doctor>> {
        let row = sqlx::query_as::<_, Doctor>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lookup used by login: only active accounts can authenticate.
    pub async fn find_active_by_email(&self, email: &str) -> DbErrorResult<Option<Doctor>> {
        let row = sqlx::query_as::<_, Doctor>(&format!(
            "SELECT {DOCTOR_COLUMNS} FROM doctors WHERE email = ? AND is_active = 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn exists_by_email(&self, email: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doctors WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doctors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
