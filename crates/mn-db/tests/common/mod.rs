#![allow(dead_code)]

//! Shared test infrastructure for repository tests.

use mn_core::{NewDoctor, NewPatient};

use sqlx::SqlitePool;

/// In-memory SQLite pool with the full schema applied.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    mn_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_doctor(email: &str) -> NewDoctor {
    NewDoctor {
        name: "Dr. Test".to_string(),
        email: email.to_string(),
        // Not a real bcrypt hash; repository tests never verify passwords
        password_hash: "$2b$04$test-hash".to_string(),
        specialization: Some("General Physician".to_string()),
        phone_number: Some("+91-00000-00000".to_string()),
        license_number: Some("MED999".to_string()),
    }
}

pub fn test_patient(name: &str) -> NewPatient {
    NewPatient {
        name: name.to_string(),
        age: 42,
        gender: Some("F".to_string()),
        contact: Some("+91-11111-11111".to_string()),
        diagnosis: Some("Hypertension".to_string()),
        last_visit: None,
        notes: Some("Follow up in two weeks".to_string()),
    }
}
