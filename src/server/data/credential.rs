//! Credential data repository for database operations.
//!
//! This module provides the `CredentialRepository` for managing the `api_user` table.
//! Credentials are created and deleted but never updated in place.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::{
    error::AppError,
    model::credential::{CreateCredentialParam, Credential},
};

/// Repository providing database operations for API credentials.
pub struct CredentialRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CredentialRepository<'a> {
    /// Creates a new CredentialRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new credential.
    ///
    /// Does not check for an existing row; a duplicate `user_id` surfaces as a
    /// unique constraint violation from the database.
    ///
    /// # Returns
    /// - `Ok(Credential)` - The stored credential
    /// - `Err(AppError::DbErr)` - Database error, including primary key conflicts
    pub async fn create(&self, param: CreateCredentialParam) -> Result<Credential, AppError> {
        let entity = entity::api_user::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            steam_id: ActiveValue::Set(param.steam_id),
            token_hash: ActiveValue::Set(param.token_hash),
        }
        .insert(self.db)
        .await?;

        Credential::from_entity(entity)
    }

    /// Finds the credential for a Discord user.
    ///
    /// # Returns
    /// - `Ok(Some(Credential))` - Credential found
    /// - `Ok(None)` - No credential stored for that user
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn find_by_user_id(&self, user_id: u64) -> Result<Option<Credential>, AppError> {
        let entity = entity::prelude::ApiUser::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(Credential::from_entity).transpose()
    }

    /// Gets every stored credential ordered by user ID.
    pub async fn get_all(&self) -> Result<Vec<Credential>, AppError> {
        let entities = entity::prelude::ApiUser::find()
            .order_by_asc(entity::api_user::Column::UserId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Credential::from_entity).collect()
    }

    /// Deletes the credential for a Discord user.
    ///
    /// Usage rows are not touched; see `UsageRepository::delete_by_user`.
    ///
    /// # Returns
    /// - `Ok(true)` - A credential was deleted
    /// - `Ok(false)` - No credential existed for that user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::ApiUser::delete_by_id(user_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
