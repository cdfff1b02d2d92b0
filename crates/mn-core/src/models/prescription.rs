//! Prescription entity - issued against a patient record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub diagnosis: String,
    pub prescription_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub doctor_notes: Option<String>,
    /// Medication list as an opaque JSON document, owned by the frontend
    pub medications_json: Option<String>,
}

/// Field set for a prescription that does not exist in the store yet.
#[derive(Debug, Clone)]
pub struct NewPrescription {
    pub patient_id: i64,
    pub diagnosis: String,
    pub prescription_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub doctor_notes: Option<String>,
    pub medications_json: Option<String>,
}
