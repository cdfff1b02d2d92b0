use crate::api::auth::auth;
use crate::api::patients::patients::{
    create_patient, delete_patient, get_patient, list_patients, update_patient,
};
use crate::api::prescriptions::prescriptions::{
    create_prescription, list_prescriptions, list_prescriptions_for_patient,
};
use crate::{admission, health, AppState};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth endpoints (exempt from admission)
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/validate", post(auth::validate))
        .route("/api/auth/health", get(auth::health))
        // Patient CRUD
        .route("/api/patients", get(list_patients).post(create_patient))
        .route(
            "/api/patients/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        // Prescriptions
        .route(
            "/api/prescriptions",
            get(list_prescriptions).post(create_prescription),
        )
        .route(
            "/api/prescriptions/patient/{id}",
            get(list_prescriptions_for_patient),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Admission filter runs once per request, before any handler
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admission::admit,
        ))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for the SPA frontend)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
