pub mod doctor_repository;
pub mod patient_repository;
pub mod prescription_repository;
