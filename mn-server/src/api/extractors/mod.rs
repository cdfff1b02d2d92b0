pub mod current_doctor;
