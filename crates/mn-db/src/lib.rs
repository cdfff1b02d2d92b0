pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::doctor_repository::DoctorRepository;
pub use repositories::patient_repository::PatientRepository;
pub use repositories::prescription_repository::PrescriptionRepository;

/// Embedded migrations, run by the server at startup and by tests
/// against in-memory pools.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
