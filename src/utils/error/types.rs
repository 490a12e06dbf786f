//! Error types for the gateway

use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or malformed client input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate national-ID registration
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials on login; identical for unknown account and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session credential on a protected route
    #[error("Authentication required")]
    Unauthenticated,

    /// Authenticated but lacking the required role or permission
    #[error("Access denied")]
    Forbidden,

    /// External civil-registry collaborator unreachable, slow, or broken
    #[error("Dependency error: {0}")]
    Dependency(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// JWT signing or verification errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Password hashing errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
