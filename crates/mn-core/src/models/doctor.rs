//! Doctor entity - a registered user account that can authenticate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A doctor account. The password is stored only as a bcrypt hash and is
/// never serialized into API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    /// Unique across active and inactive accounts (enforced by the store)
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
    /// Accounts are deactivated, never physically deleted
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Field set for a doctor that does not exist in the store yet.
/// The id is assigned by the database on insert.
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub specialization: Option<String>,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
}
