use mn_core::NewPatient;

use chrono::NaiveDate;
use serde::Deserialize;

/// Body for both create and full-record update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRequest {
    pub name: String,

    #[serde(default)]
    pub age: i64,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default)]
    pub contact: Option<String>,

    #[serde(default)]
    pub diagnosis: Option<String>,

    #[serde(default)]
    pub last_visit: Option<NaiveDate>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl From<PatientRequest> for NewPatient {
    fn from(r: PatientRequest) -> Self {
        Self {
            name: r.name,
            age: r.age,
            gender: r.gender,
            contact: r.contact,
            diagnosis: r.diagnosis,
            last_visit: r.last_visit,
            notes: r.notes,
        }
    }
}
