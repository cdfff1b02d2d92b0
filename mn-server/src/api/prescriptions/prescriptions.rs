//! Prescription REST API handlers

use crate::{ApiError, ApiResult, AppState, CreatePrescriptionRequest, CurrentDoctor, PrescriptionDto};

use mn_core::{NewPatient, NewPrescription};
use mn_db::{PatientRepository, PrescriptionRepository};

use std::panic::Location;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use error_location::ErrorLocation;

/// POST /api/prescriptions
///
/// Resolves the patient first: an explicit id must exist, otherwise a
/// new patient record is created from the inline fields.
pub async fn create_prescription(
    State(state): State<AppState>,
    CurrentDoctor(doctor): CurrentDoctor,
    Json(request): Json<CreatePrescriptionRequest>,
) -> ApiResult<(StatusCode, Json<PrescriptionDto>)> {
    let patients = PatientRepository::new(state.pool.clone());

    let patient = match request.patient_id {
        Some(id) => patients.find_by_id(id).await?.ok_or_else(|| ApiError::BadRequest {
            message: format!("Patient {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?,
        None => {
            let name = request.patient_name.clone().ok_or_else(|| ApiError::Validation {
                message: "Either patientId or patientName is required".to_string(),
                field: Some("patientName".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })?;

            patients
                .create(&NewPatient {
                    name,
                    age: request.patient_age.unwrap_or(0),
                    gender: request.patient_gender.clone(),
                    contact: request.patient_contact.clone(),
                    ..NewPatient::default()
                })
                .await?
        }
    };

    let repo = PrescriptionRepository::new(state.pool.clone());
    let created = repo
        .create(&NewPrescription {
            patient_id: patient.id,
            diagnosis: request.diagnosis,
            prescription_date: request.prescription_date,
            valid_until: request.valid_until,
            doctor_notes: request.doctor_notes,
            medications_json: request.medications_json,
        })
        .await?;

    log::info!(
        "Prescription {} created for patient {} by {}",
        created.id,
        patient.id,
        doctor.email
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/prescriptions
pub async fn list_prescriptions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PrescriptionDto>>> {
    let repo = PrescriptionRepository::new(state.pool.clone());
    let prescriptions = repo.find_all().await?;

    Ok(Json(
        prescriptions.into_iter().map(PrescriptionDto::from).collect(),
    ))
}

/// GET /api/prescriptions/patient/{id}
pub async fn list_prescriptions_for_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
) -> ApiResult<Json<Vec<PrescriptionDto>>> {
    let repo = PrescriptionRepository::new(state.pool.clone());
    let prescriptions = repo.find_by_patient(patient_id).await?;

    Ok(Json(
        prescriptions.into_iter().map(PrescriptionDto::from).collect(),
    ))
}
