use mn_core::NewDoctor;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub specialization: Option<String>,
}

impl RegisterRequest {
    /// Candidate identity record; the password hash is filled in by the
    /// session service before the insert.
    pub fn into_candidate(self) -> (NewDoctor, String) {
        let candidate = NewDoctor {
            name: self.name,
            email: self.email,
            password_hash: String::new(),
            specialization: self.specialization,
            phone_number: self.phone,
            license_number: None,
        };
        (candidate, self.password)
    }
}
