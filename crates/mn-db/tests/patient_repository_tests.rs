mod common;

use crate::common::{create_test_pool, test_patient};

use chrono::NaiveDate;
use mn_db::PatientRepository;

#[tokio::test]
async fn create_and_find_round_trip() {
    let pool = create_test_pool().await;
    let repo = PatientRepository::new(pool);

    let mut new_patient = test_patient("Asha Verma");
    new_patient.last_visit = NaiveDate::from_ymd_opt(2026, 2, 14);

    let created = repo.create(&new_patient).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Asha Verma");
    assert_eq!(created.last_visit, NaiveDate::from_ymd_opt(2026, 2, 14));

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn find_all_returns_in_insertion_order() {
    let pool = create_test_pool().await;
    let repo = PatientRepository::new(pool);

    repo.create(&test_patient("First")).await.unwrap();
    repo.create(&test_patient("Second")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "First");
    assert_eq!(all[1].name, "Second");
}

#[tokio::test]
async fn update_replaces_record_and_reports_missing_id() {
    let pool = create_test_pool().await;
    let repo = PatientRepository::new(pool);

    let created = repo.create(&test_patient("Before")).await.unwrap();

    let mut changed = test_patient("After");
    changed.age = 55;
    changed.diagnosis = Some("Diabetes".to_string());

    let updated = repo.update(created.id, &changed).await.unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.age, 55);

    let missing = repo.update(9999, &changed).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn delete_removes_record_and_reports_missing_id() {
    let pool = create_test_pool().await;
    let repo = PatientRepository::new(pool);

    let created = repo.create(&test_patient("Temp")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}
