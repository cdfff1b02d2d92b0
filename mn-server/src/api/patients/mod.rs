pub mod patient_dto;
pub mod patient_request;
pub mod patients;
