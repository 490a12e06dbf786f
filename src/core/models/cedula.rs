//! National-ID (cedula) parsing and normalization

use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

/// Normalized national ID: nationality letter plus digit string.
///
/// `V` marks citizens and `E` residents; input without a recognized
/// letter defaults to `V`. Separators (dots, dashes, spaces) are
/// stripped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cedula {
    nationality: char,
    number: String,
}

impl Cedula {
    /// Nationality letter (`V` or `E`)
    pub fn nationality(&self) -> char {
        self.nationality
    }

    /// Digit portion, without separators
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for Cedula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.nationality, self.number)
    }
}

impl std::str::FromStr for Cedula {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if cleaned.is_empty() {
            return Err(AppError::validation("cedula is required"));
        }

        let (nationality, rest) = match cleaned.chars().next() {
            Some(c) if c.eq_ignore_ascii_case(&'V') => ('V', &cleaned[1..]),
            Some(c) if c.eq_ignore_ascii_case(&'E') => ('E', &cleaned[1..]),
            _ => ('V', cleaned.as_str()),
        };

        let number: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();
        if number.is_empty() {
            return Err(AppError::validation("cedula must contain digits"));
        }

        Ok(Self { nationality, number })
    }
}
