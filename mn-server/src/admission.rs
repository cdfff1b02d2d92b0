//! Request admission filter.
//!
//! Runs exactly once per request, before any handler. Non-exempt
//! requests must carry a valid bearer token; the decoded identity is
//! attached to the request so handlers never re-verify the token.

use crate::{ApiError, AppState};

use mn_auth::AuthError;

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

/// Route prefixes admitted without a token.
pub const EXEMPT_PREFIXES: &[&str] = &["/api/auth", "/health", "/live", "/ready"];

/// Identity resolved by the admission filter, available to handlers via
/// request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedDoctor {
    pub id: i64,
    pub email: String,
}

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Middleware gating every non-exempt request on token validity.
///
/// All failure modes (missing header, wrong scheme, bad signature,
/// expiry) collapse to the same 401 response; the distinction is only
/// logged.
pub async fn admit(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    if is_exempt(path) {
        return Ok(next.run(request).await);
    }

    let token = match bearer_token(request.headers()) {
        Ok(token) => token,
        Err(e) => {
            log::debug!("Admission rejected {}: {}", path, e);
            return Err(ApiError::unauthorized());
        }
    };

    match state.tokens.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(AuthenticatedDoctor {
                id: claims.doctor_id,
                email: claims.sub,
            });
            Ok(next.run(request).await)
        }
        Err(e) => {
            log::debug!("Admission rejected {}: {}", path, e);
            Err(ApiError::unauthorized())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exempt_prefixes_cover_auth_and_probes() {
        assert!(is_exempt("/api/auth/login"));
        assert!(is_exempt("/api/auth/health"));
        assert!(is_exempt("/health"));
        assert!(is_exempt("/live"));
        assert!(is_exempt("/ready"));

        assert!(!is_exempt("/api/patients"));
        assert!(!is_exempt("/api/prescriptions/patient/1"));
    }

    #[test]
    fn bearer_extraction_requires_exact_scheme() {
        let mut headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingHeader { .. })
        ));

        headers.insert(AUTHORIZATION, "Basic dXNlcjpwYXNz".parse().unwrap());
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::InvalidScheme { .. })
        ));

        headers.insert(AUTHORIZATION, "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
