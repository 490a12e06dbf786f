//! Helper functions for middleware

use actix_web::http::header::HeaderMap;

/// Extract a bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization")?.to_str().ok()?;
    auth_header
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health", "/api/auth/"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}
