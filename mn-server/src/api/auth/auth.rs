//! Auth REST API handlers
//!
//! Login, registration, and token validation. These routes are on the
//! admission filter's exempt list; everything else behind the API
//! requires the token issued here.

use crate::session::{LoginOutcome, SessionService};
use crate::{AppState, LoginRequest, LoginResponse, RegisterRequest};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ValidateQuery {
    pub token: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let service = SessionService::new(&state);

    match service.login(&request.email, &request.password).await {
        LoginOutcome::Success { token, doctor } => (
            StatusCode::OK,
            Json(LoginResponse::success(token, doctor.into())),
        ),
        LoginOutcome::Failure { message } => (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure(message)),
        ),
    }
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> (StatusCode, Json<LoginResponse>) {
    let service = SessionService::new(&state);
    let (candidate, password) = request.into_candidate();

    if service.register(candidate, &password).await {
        (
            StatusCode::OK,
            Json(LoginResponse::message("Registration successful")),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(LoginResponse::failure(
                "Registration failed. User may already exist.",
            )),
        )
    }
}

/// POST /api/auth/validate?token=...
pub async fn validate(
    State(state): State<AppState>,
    Query(query): Query<ValidateQuery>,
) -> (StatusCode, Json<LoginResponse>) {
    let service = SessionService::new(&state);

    if service.validate(&query.token) {
        (StatusCode::OK, Json(LoginResponse::message("Token is valid")))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::failure("Token is invalid")),
        )
    }
}

/// GET /api/auth/health
pub async fn health() -> &'static str {
    "Auth service is running"
}
