pub mod models;

pub use models::doctor::{Doctor, NewDoctor};
pub use models::patient::{NewPatient, Patient};
pub use models::prescription::{NewPrescription, Prescription};
