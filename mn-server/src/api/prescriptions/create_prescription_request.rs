use chrono::NaiveDate;
use serde::Deserialize;

/// Create body. Either `patient_id` references an existing patient, or
/// the inline `patient_*` fields describe one to create first.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrescriptionRequest {
    #[serde(default)]
    pub patient_id: Option<i64>,

    #[serde(default)]
    pub patient_name: Option<String>,

    #[serde(default)]
    pub patient_age: Option<i64>,

    #[serde(default)]
    pub patient_gender: Option<String>,

    #[serde(default)]
    pub patient_contact: Option<String>,

    pub diagnosis: String,
    pub prescription_date: NaiveDate,

    #[serde(default)]
    pub valid_until: Option<NaiveDate>,

    #[serde(default)]
    pub doctor_notes: Option<String>,

    #[serde(default)]
    pub medications_json: Option<String>,
}
