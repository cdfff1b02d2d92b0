pub mod auth;
pub mod error;
pub mod extractors;
pub mod patients;
pub mod prescriptions;
