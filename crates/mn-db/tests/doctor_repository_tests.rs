mod common;

use crate::common::{create_test_pool, test_doctor};

use mn_db::{DbError, DoctorRepository};

#[tokio::test]
async fn create_assigns_id_and_round_trips() {
    let pool = create_test_pool().await;
    let repo = DoctorRepository::new(pool);

    let created = repo.create(&test_doctor("a@medicnote.com")).await.unwrap();

    assert!(created.id > 0);
    assert!(created.is_active);
    assert_eq!(created.email, "a@medicnote.com");

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn duplicate_email_is_unique_violation() {
    let pool = create_test_pool().await;
    let repo = DoctorRepository::new(pool);

    repo.create(&test_doctor("dup@medicnote.com")).await.unwrap();
    let second = repo.create(&test_doctor("dup@medicnote.com")).await;

    assert!(matches!(second, Err(DbError::UniqueViolation { .. })));

    // First row is untouched and remains the only one
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn email_lookup_is_case_sensitive_as_stored() {
    let pool = create_test_pool().await;
    let repo = DoctorRepository::new(pool);

    repo.create(&test_doctor("Case@medicnote.com"))
        .await
        .unwrap();

    assert!(repo
        .find_by_email("Case@medicnote.com")
        .await
        .unwrap()
        .is_some());
    assert!(repo
        .find_by_email("case@medicnote.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn inactive_doctor_is_invisible_to_active_lookup() {
    let pool = create_test_pool().await;
    let repo = DoctorRepository::new(pool.clone());

    let created = repo
        .create(&test_doctor("inactive@medicnote.com"))
        .await
        .unwrap();

    sqlx::query("UPDATE doctors SET is_active = 0 WHERE id = ?")
        .bind(created.id)
        .execute(&pool)
        .await
        .unwrap();

    assert!(repo
        .find_active_by_email("inactive@medicnote.com")
        .await
        .unwrap()
        .is_none());
    // Still visible to existence check, so the email cannot be re-registered
    assert!(repo.exists_by_email("inactive@medicnote.com").await.unwrap());
}

#[tokio::test]
async fn exists_by_email_reports_presence() {
    let pool = create_test_pool().await;
    let repo = DoctorRepository::new(pool);

    assert!(!repo.exists_by_email("nobody@medicnote.com").await.unwrap());

    repo.create(&test_doctor("somebody@medicnote.com"))
        .await
        .unwrap();

    assert!(repo.exists_by_email("somebody@medicnote.com").await.unwrap());
}
