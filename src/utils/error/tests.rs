//! Tests for error types and HTTP mapping

use super::types::AppError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_validation_maps_to_bad_request() {
    let err = AppError::validation("cedula is required");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_conflict_maps_to_bad_request() {
    // The client contract uses 400 for duplicate registration, not 409.
    let err = AppError::conflict("account already exists");
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_invalid_credentials_maps_to_bad_request() {
    assert_eq!(
        AppError::InvalidCredentials.status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_unauthenticated_maps_to_401() {
    assert_eq!(
        AppError::Unauthenticated.status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn test_forbidden_maps_to_403() {
    assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
}

#[test]
fn test_internal_maps_to_500() {
    let err = AppError::internal("boom");
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_internal_detail_not_leaked() {
    let err = AppError::internal("connection pool exhausted at 10.0.0.3");
    let response = err.error_response();
    let bytes = tokio_test::block_on(actix_web::body::to_bytes(response.into_body())).unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("10.0.0.3"));
    assert!(text.contains("INTERNAL_ERROR"));
}

#[test]
fn test_client_safe_message_preserved() {
    let err = AppError::validation("cedula is required");
    let response = err.error_response();
    let bytes = tokio_test::block_on(actix_web::body::to_bytes(response.into_body())).unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("cedula is required"));
}

#[test]
fn test_invalid_credentials_message_is_generic() {
    assert_eq!(AppError::InvalidCredentials.to_string(), "Invalid credentials");
}
