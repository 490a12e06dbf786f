//! Helper functions for creating specific error types

use super::types::AppError;

impl AppError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn dependency<S: Into<String>>(message: S) -> Self {
        Self::Dependency(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error is safe to show to the client verbatim
    pub fn is_client_safe(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Conflict(_)
                | Self::InvalidCredentials
                | Self::Unauthenticated
                | Self::Forbidden
        )
    }
}
