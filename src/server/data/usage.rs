//! Usage log repository.
//!
//! The `api_usage` table is append-only. Rows are keyed by `(user_id, created_at)` and
//! only removed together with their user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{error::AppError, model::usage::UsageRecord};

/// Repository providing database operations for usage records.
pub struct UsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageRepository<'a> {
    /// Creates a new UsageRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a usage record stamped with the current time.
    ///
    /// Does not verify that the user has a credential.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the acting user
    /// - `action` - Free-text description of the action
    ///
    /// # Returns
    /// - `Ok(UsageRecord)` - The stored record
    /// - `Err(AppError)` - Database error during insert
    pub async fn record(&self, user_id: u64, action: impl Into<String>) -> Result<UsageRecord, AppError> {
        let entity = entity::api_usage::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            action: ActiveValue::Set(action.into()),
        }
        .insert(self.db)
        .await?;

        UsageRecord::from_entity(entity)
    }

    /// Gets all usage records for a user, oldest first.
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<UsageRecord>, AppError> {
        let entities = entity::prelude::ApiUsage::find()
            .filter(entity::api_usage::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::api_usage::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(UsageRecord::from_entity).collect()
    }

    /// Counts usage records for a user.
    pub async fn count_by_user(&self, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::ApiUsage::find()
            .filter(entity::api_usage::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await
    }

    /// Deletes every usage record for a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_user(&self, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::ApiUsage::delete_many()
            .filter(entity::api_usage::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
