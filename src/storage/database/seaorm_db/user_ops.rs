//! Account store operations

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr};
use tracing::debug;

use crate::core::models::User;
use crate::utils::error::{AppError, Result};

use super::super::entities::{self, user};
use super::types::Database;

impl Database {
    /// Find an account by its exact national ID
    pub async fn find_user_by_cedula(&self, cedula: &str) -> Result<Option<User>> {
        debug!("Finding user by cedula");

        let model = entities::User::find()
            .filter(user::Column::Cedula.eq(cedula))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain_user()))
    }

    /// Find an account by ID
    pub async fn find_user_by_id(&self, user_id: uuid::Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain_user()))
    }

    /// Insert a new account.
    ///
    /// The unique index on the cedula decides races between concurrent
    /// registrations; its violation surfaces as a conflict, not a crash.
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating account for cedula {}", user.cedula);

        let active_model = user::Model::from_domain_user(user);

        match entities::User::insert(active_model).exec(&self.db).await {
            Ok(_) => Ok(user.clone()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::conflict(
                    "An account with this cedula already exists",
                )),
                _ => Err(AppError::Database(e)),
            },
        }
    }

    /// List all accounts, oldest first
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let models = entities::User::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_user()).collect())
    }
}
