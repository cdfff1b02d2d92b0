use mn_core::Doctor;

use serde::Serialize;

/// Public projection of a doctor account. The password hash is excluded
/// by construction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
}

impl From<Doctor> for DoctorInfo {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id,
            name: d.name,
            email: d.email,
            specialization: d.specialization,
            phone_number: d.phone_number,
        }
    }
}

/// Response body shared by the auth endpoints.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<DoctorInfo>,
}

impl LoginResponse {
    pub fn success(token: String, user: DoctorInfo) -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            user: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
            user: None,
        }
    }
}
