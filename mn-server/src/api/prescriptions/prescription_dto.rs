use mn_core::Prescription;

use chrono::NaiveDate;
use serde::Serialize;

/// Prescription DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDto {
    pub id: i64,
    pub patient_id: i64,
    pub diagnosis: String,
    pub prescription_date: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub doctor_notes: Option<String>,
    pub medications_json: Option<String>,
}

impl From<Prescription> for PrescriptionDto {
    fn from(p: Prescription) -> Self {
        Self {
            id: p.id,
            patient_id: p.patient_id,
            diagnosis: p.diagnosis,
            prescription_date: p.prescription_date,
            valid_until: p.valid_until,
            doctor_notes: p.doctor_notes,
            medications_json: p.medications_json,
        }
    }
}
