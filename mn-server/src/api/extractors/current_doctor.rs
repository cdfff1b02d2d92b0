//! Axum extractor for the identity attached by the admission filter

use crate::{ApiError, AppState, AuthenticatedDoctor};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the doctor resolved during admission.
///
/// Only available on protected routes; on an exempt route (where the
/// filter attaches nothing) extraction rejects with 401.
pub struct CurrentDoctor(pub AuthenticatedDoctor);

impl FromRequestParts<AppState> for CurrentDoctor {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedDoctor>()
                .cloned()
                .map(CurrentDoctor)
                .ok_or_else(ApiError::unauthorized)
        }
    }
}
