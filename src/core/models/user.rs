//! User account types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account ID, assigned at creation
    pub id: Uuid,
    /// National ID (unique across all accounts)
    pub cedula: String,
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Password hash (argon2 PHC string)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role
    pub role: Role,
    /// Creation timestamp, never mutated
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new citizen account. Name fields are trimmed; the role
    /// always starts as `natural` — escalation has no code path here.
    pub fn new(cedula: String, name: &str, surname: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            cedula,
            name: name.trim().to_string(),
            surname: surname.trim().to_string(),
            password_hash,
            role: Role::default(),
            created_at: Utc::now(),
        }
    }
}

/// Client-safe account projection, used in session payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Account ID
    pub id: Uuid,
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// National ID
    pub cedula: String,
    /// Account role
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            surname: user.surname.clone(),
            cedula: user.cedula.clone(),
            role: user.role,
        }
    }
}

/// Account role
///
/// A closed set; extending it requires updating the permission matrix in
/// lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Citizen
    Natural,
    /// Government / auditor
    Gobierno,
    /// Administrator
    Admin,
    /// Maintenance / technical operator
    Mantenimiento,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 4] = [
        Role::Natural,
        Role::Gobierno,
        Role::Admin,
        Role::Mantenimiento,
    ];
}

impl Default for Role {
    fn default() -> Self {
        Role::Natural
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Natural => write!(f, "natural"),
            Role::Gobierno => write!(f, "gobierno"),
            Role::Admin => write!(f, "admin"),
            Role::Mantenimiento => write!(f, "mantenimiento"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "natural" => Ok(Role::Natural),
            "gobierno" => Ok(Role::Gobierno),
            "admin" => Ok(Role::Admin),
            "mantenimiento" => Ok(Role::Mantenimiento),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("V12345678".into(), "  Ana ", " Gomez ", "hash".into());
        assert_eq!(user.role, Role::Natural);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.surname, "Gomez");
    }

    #[test]
    fn test_role_display_from_str_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("V1".into(), "Ana", "Gomez", "$argon2id$secret".into());
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password_hash"));
    }

    #[test]
    fn test_summary_excludes_hash() {
        let user = User::new("V1".into(), "Ana", "Gomez", "hash".into());
        let summary = UserSummary::from(&user);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("hash"));
        assert!(json.contains("\"role\":\"natural\""));
    }
}
