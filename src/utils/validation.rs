//! Request input validation
//!
//! Validators reject missing or malformed client input before any I/O is
//! performed. Every failure maps to a 400 with an actionable message.

use crate::utils::error::{AppError, Result};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Input validators for the auth endpoints
pub struct DataValidator;

impl DataValidator {
    /// Require a non-empty field
    pub fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("{} is required", field)));
        }
        Ok(())
    }

    /// Validate a plaintext password
    pub fn validate_password(password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(AppError::validation("password is required"));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }

    /// Validate a person-name field (name or surname)
    pub fn validate_name(field: &str, value: &str) -> Result<()> {
        Self::require(field, value)?;
        if value.trim().len() > 120 {
            return Err(AppError::validation(format!("{} is too long", field)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_empty_and_blank() {
        assert!(DataValidator::require("cedula", "").is_err());
        assert!(DataValidator::require("cedula", "   ").is_err());
        assert!(DataValidator::require("cedula", "V123").is_ok());
    }

    #[test]
    fn test_password_length() {
        assert!(DataValidator::validate_password("abcde").is_err());
        assert!(DataValidator::validate_password("abcdef").is_ok());
        assert!(DataValidator::validate_password("").is_err());
    }

    #[test]
    fn test_name_length_cap() {
        let long = "x".repeat(121);
        assert!(DataValidator::validate_name("name", &long).is_err());
        assert!(DataValidator::validate_name("name", "Ana").is_ok());
    }
}
