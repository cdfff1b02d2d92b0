//! Session issuer: the login/registration/validation orchestration over
//! the identity store, the credential verifier, and the token codec.

use crate::AppState;

use mn_core::{Doctor, NewDoctor};
use mn_db::DoctorRepository;

use mn_auth::{PasswordHasher, TokenCodec};

use std::sync::Arc;

/// Generic login failure. Unknown email and wrong password produce this
/// identical message so callers cannot enumerate accounts.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Terminal outcome of a login attempt. Nothing intermediate is ever
/// persisted.
#[derive(Debug)]
pub enum LoginOutcome {
    Success { token: String, doctor: Doctor },
    Failure { message: String },
}

pub struct SessionService {
    doctors: DoctorRepository,
    passwords: PasswordHasher,
    tokens: Arc<TokenCodec>,
}

impl SessionService {
    pub fn new(state: &AppState) -> Self {
        Self {
            doctors: DoctorRepository::new(state.pool.clone()),
            passwords: state.passwords,
            tokens: state.tokens.clone(),
        }
    }

    /// Authenticate an email/password pair and mint a token on success.
    ///
    /// Storage and encoding failures are logged and reported with the
    /// same generic message as bad credentials; internal detail never
    /// reaches the caller.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let doctor = match self.doctors.find_active_by_email(email).await {
            Ok(Some(doctor)) => doctor,
            Ok(None) => return Self::failure(),
            Err(e) => {
                log::error!("Login lookup failed: {}", e);
                return Self::failure();
            }
        };

        if !self.passwords.matches(password, &doctor.password_hash) {
            return Self::failure();
        }

        match self.tokens.issue(&doctor.email, doctor.id) {
            Ok(token) => LoginOutcome::Success { token, doctor },
            Err(e) => {
                log::error!("Token issuance failed: {}", e);
                Self::failure()
            }
        }
    }

    /// Register a new doctor account. Returns false on duplicate email
    /// or any internal failure; the caller sees no distinction.
    ///
    /// The pre-check handles the common case; the unique index on
    /// doctors.email is the authoritative guard when two registrations
    /// race past it.
    pub async fn register(&self, mut doctor: NewDoctor, password: &str) -> bool {
        match self.doctors.exists_by_email(&doctor.email).await {
            Ok(true) => return false,
            Ok(false) => {}
            Err(e) => {
                log::error!("Registration existence check failed: {}", e);
                return false;
            }
        }

        doctor.password_hash = match self.passwords.hash(password) {
            Ok(hash) => hash,
            Err(e) => {
                log::error!("Password hashing failed: {}", e);
                return false;
            }
        };

        match self.doctors.create(&doctor).await {
            Ok(_) => true,
            Err(e) if e.is_unique_violation() => {
                log::info!("Registration lost the race for {}", doctor.email);
                false
            }
            Err(e) => {
                log::error!("Registration insert failed: {}", e);
                false
            }
        }
    }

    /// True iff the token's signature verifies and it is unexpired.
    pub fn validate(&self, token: &str) -> bool {
        match self.tokens.verify(token) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("Token validation failed: {}", e);
                false
            }
        }
    }

    fn failure() -> LoginOutcome {
        LoginOutcome::Failure {
            message: INVALID_CREDENTIALS.to_string(),
        }
    }
}
