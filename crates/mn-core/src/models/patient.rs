//! Patient entity - a clinic patient record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub diagnosis: Option<String>,
    pub last_visit: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Field set for a patient that does not exist in the store yet.
#[derive(Debug, Clone, Default)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub diagnosis: Option<String>,
    pub last_visit: Option<NaiveDate>,
    pub notes: Option<String>,
}
