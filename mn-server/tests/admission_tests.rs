//! Integration tests for the request admission filter
mod common;

use crate::common::{
    body_json, create_test_app_state, create_test_doctor, request, TEST_SECRET,
};

use axum::http::StatusCode;
use mn_auth::{TokenCodec, TokenConfig};
use tower::ServiceExt;

use mn_server::build_router;

#[tokio::test]
async fn protected_route_without_token_is_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(request("GET", "/api/patients", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn protected_route_with_wrong_scheme_is_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/api/patients")
                .header("Authorization", "Basic dXNlcjpwYXNz")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_route_with_valid_token_is_admitted() {
    let state = create_test_app_state().await;
    let doctor_id = create_test_doctor(&state, "doc@medicnote.com", "password123").await;
    let token = state.tokens.issue("doc@medicnote.com", doctor_id).unwrap();
    let app = build_router(state);

    let response = app
        .oneshot(request("GET", "/api/patients", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn expired_token_is_rejected_like_any_invalid_token() {
    let state = create_test_app_state().await;
    let doctor_id = create_test_doctor(&state, "doc@medicnote.com", "password123").await;

    // Same secret, zero TTL: expired the instant it is checked
    let expired_codec = TokenCodec::new(&TokenConfig::new(TEST_SECRET, 0));
    let token = expired_codec.issue("doc@medicnote.com", doctor_id).unwrap();

    let app = build_router(state);
    let response = app
        .oneshot(request("GET", "/api/patients", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let state = create_test_app_state().await;
    let foreign_codec = TokenCodec::new(&TokenConfig::new(
        "a-completely-different-secret-key",
        TokenConfig::DEFAULT_TTL_MS,
    ));
    let token = foreign_codec.issue("doc@medicnote.com", 1).unwrap();

    let app = build_router(state);
    let response = app
        .oneshot(request("GET", "/api/patients", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn exempt_routes_pass_without_a_token() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    for uri in ["/health", "/live", "/ready", "/api/auth/health"] {
        let response = app
            .clone()
            .oneshot(request("GET", uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "rejected: {uri}");
    }
}
