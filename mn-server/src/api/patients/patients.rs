//! Patient REST API handlers
//!
//! Plain CRUD behind the admission filter.

use crate::{ApiError, ApiResult, AppState, PatientDto, PatientRequest};

use mn_db::PatientRepository;

use std::panic::Location;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use error_location::ErrorLocation;

/// GET /api/patients
pub async fn list_patients(State(state): State<AppState>) -> ApiResult<Json<Vec<PatientDto>>> {
    let repo = PatientRepository::new(state.pool.clone());
    let patients = repo.find_all().await?;

    Ok(Json(patients.into_iter().map(PatientDto::from).collect()))
}

/// GET /api/patients/{id}
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PatientDto>> {
    let repo = PatientRepository::new(state.pool.clone());
    let patient = repo.find_by_id(id).await?.ok_or_else(|| ApiError::NotFound {
        message: format!("Patient {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Json(patient.into()))
}

/// POST /api/patients
pub async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<PatientRequest>,
) -> ApiResult<(StatusCode, Json<PatientDto>)> {
    let repo = PatientRepository::new(state.pool.clone());
    let created = repo.create(&request.into()).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PUT /api/patients/{id}
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<PatientRequest>,
) -> ApiResult<Json<PatientDto>> {
    let repo = PatientRepository::new(state.pool.clone());
    let updated = repo
        .update(id, &request.into())
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Patient {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(updated.into()))
}

/// DELETE /api/patients/{id}
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let repo = PatientRepository::new(state.pool.clone());

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound {
            message: format!("Patient {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
