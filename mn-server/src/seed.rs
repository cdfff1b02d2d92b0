//! Demo data seeding: three doctor accounts, inserted only when the
//! doctors table is empty.

use mn_auth::PasswordHasher;
use mn_core::NewDoctor;
use mn_db::DoctorRepository;

use sqlx::SqlitePool;

const DEMO_PASSWORD: &str = "password123";

const DEMO_DOCTORS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Dr. Shashank",
        "shashank@medicnote.com",
        "General Physician",
        "+91-98765-43210",
        "MED001",
    ),
    (
        "Dr. Rajesh Kumar",
        "rajesh.kumar@medicnote.com",
        "Cardiologist",
        "+91-87654-32109",
        "MED002",
    ),
    (
        "Dr. Anjali Patel",
        "anjali.patel@medicnote.com",
        "Pediatrician",
        "+91-76543-21098",
        "MED003",
    ),
];

/// Seed the demo doctor accounts. Failures are logged and non-fatal.
pub async fn seed_demo_doctors(pool: &SqlitePool, passwords: &PasswordHasher) {
    let repo = DoctorRepository::new(pool.clone());

    match repo.count().await {
        Ok(0) => {}
        Ok(_) => return,
        Err(e) => {
            log::warn!("Skipping demo seed, count failed: {}", e);
            return;
        }
    }

    for (name, email, specialization, phone, license) in DEMO_DOCTORS {
        let password_hash = match passwords.hash(DEMO_PASSWORD) {
            Ok(hash) => hash,
            Err(e) => {
                log::warn!("Skipping demo seed, hashing failed: {}", e);
                return;
            }
        };

        let doctor = NewDoctor {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            specialization: Some(specialization.to_string()),
            phone_number: Some(phone.to_string()),
            license_number: Some(license.to_string()),
        };

        match repo.create(&doctor).await {
            Ok(created) => log::info!("Seeded demo doctor {} ({})", created.email, created.id),
            Err(e) => log::warn!("Failed to seed demo doctor {}: {}", email, e),
        }
    }

    log::info!("Demo credentials: <email>@medicnote.com / {}", DEMO_PASSWORD);
}
