pub mod doctor;
pub mod patient;
pub mod prescription;
