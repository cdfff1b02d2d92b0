use mn_core::Patient;

use chrono::NaiveDate;
use serde::Serialize;

/// Patient DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub diagnosis: Option<String>,
    pub last_visit: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl From<Patient> for PatientDto {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            name: p.name,
            age: p.age,
            gender: p.gender,
            contact: p.contact,
            diagnosis: p.diagnosis,
            last_visit: p.last_visit,
            notes: p.notes,
        }
    }
}
