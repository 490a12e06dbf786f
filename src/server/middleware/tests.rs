//! Middleware unit tests

use actix_web::http::header;
use actix_web::test::TestRequest;
use actix_web::{FromRequest, HttpMessage};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::core::models::Role;

use super::helpers::{extract_bearer_token, is_public_route};

#[test]
fn test_extract_bearer_token() {
    let req = TestRequest::default()
        .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
        .to_http_request();
    assert_eq!(
        extract_bearer_token(req.headers()),
        Some("abc.def.ghi".to_string())
    );
}

#[test]
fn test_extract_bearer_token_rejects_other_schemes() {
    let req = TestRequest::default()
        .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
        .to_http_request();
    assert_eq!(extract_bearer_token(req.headers()), None);

    let empty = TestRequest::default()
        .insert_header((header::AUTHORIZATION, "Bearer "))
        .to_http_request();
    assert_eq!(extract_bearer_token(empty.headers()), None);

    let missing = TestRequest::default().to_http_request();
    assert_eq!(extract_bearer_token(missing.headers()), None);
}

#[test]
fn test_public_route_allowlist() {
    assert!(is_public_route("/health"));
    assert!(is_public_route("/api/auth/login"));
    assert!(is_public_route("/api/auth/check-cedula"));
    assert!(!is_public_route("/api/me"));
    assert!(!is_public_route("/api/users"));
    assert!(!is_public_route("/api/authx"));
}

#[actix_web::test]
async fn test_authenticated_extractor_reads_extensions() {
    let req = TestRequest::default().to_http_request();
    let identity = AuthenticatedUser {
        user_id: Uuid::new_v4(),
        role: Role::Gobierno,
    };
    req.extensions_mut().insert(identity.clone());

    let extracted = AuthenticatedUser::extract(&req).await.unwrap();
    assert_eq!(extracted.user_id, identity.user_id);
    assert_eq!(extracted.role, Role::Gobierno);
}

#[actix_web::test]
async fn test_authenticated_extractor_fails_without_identity() {
    let req = TestRequest::default().to_http_request();
    assert!(AuthenticatedUser::extract(&req).await.is_err());
}
