#![allow(dead_code)]

//! Test infrastructure for mn-server API tests

use mn_auth::{PasswordHasher, TokenCodec, TokenConfig};
use mn_core::NewDoctor;
use mn_db::DoctorRepository;
use mn_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
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

/// Create AppState for testing (reduced bcrypt cost keeps tests fast)
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let tokens = Arc::new(TokenCodec::new(&TokenConfig::new(
        TEST_SECRET,
        TokenConfig::DEFAULT_TTL_MS,
    )));

    AppState::new(pool, tokens, PasswordHasher::with_cost(4))
}

/// Insert a doctor with a properly hashed password, returning its id
pub async fn create_test_doctor(state: &AppState, email: &str, password: &str) -> i64 {
    let repo = DoctorRepository::new(state.pool.clone());
    let doctor = repo
        .create(&NewDoctor {
            name: "Dr. Shashank".to_string(),
            email: email.to_string(),
            password_hash: state.passwords.hash(password).unwrap(),
            specialization: Some("General Physician".to_string()),
            phone_number: Some("+91-98765-43210".to_string()),
            license_number: Some("MED001".to_string()),
        })
        .await
        .expect("Failed to create test doctor");

    doctor.id
}

/// Build a request with optional bearer token and JSON body
pub fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Collect a response body as JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body was not JSON")
}

/// Collect a response body as a string
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
