use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::core::models::User as DomainUser;

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Account ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// National ID (unique)
    #[sea_orm(unique)]
    pub cedula: String,

    /// First name
    pub name: String,

    /// Surname
    pub surname: String,

    /// Password hash
    pub password_hash: String,

    /// Account role
    pub role: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// User entity relations (none)
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain user type
    pub fn to_domain_user(&self) -> DomainUser {
        DomainUser {
            id: self.id,
            cedula: self.cedula.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            password_hash: self.password_hash.clone(),
            role: self.role.parse().unwrap_or_default(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }

    /// Build an active model from the domain user type
    pub fn from_domain_user(user: &DomainUser) -> ActiveModel {
        ActiveModel {
            id: Set(user.id),
            cedula: Set(user.cedula.clone()),
            name: Set(user.name.clone()),
            surname: Set(user.surname.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.to_string()),
            created_at: Set(user.created_at.into()),
        }
    }
}
