pub mod admission;
pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod seed;
pub mod session;
pub mod state;

pub use api::{
    auth::{
        login_request::LoginRequest, login_response::DoctorInfo, login_response::LoginResponse,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_doctor::CurrentDoctor,
    patients::{patient_dto::PatientDto, patient_request::PatientRequest},
    prescriptions::{
        create_prescription_request::CreatePrescriptionRequest,
        prescription_dto::PrescriptionDto,
    },
};

pub use crate::admission::AuthenticatedDoctor;
pub use crate::routes::build_router;
pub use crate::session::SessionService;
pub use crate::state::AppState;
