pub mod create_prescription_request;
pub mod prescription_dto;
pub mod prescriptions;
