//! Usage factory for creating `api_usage` rows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating usage rows with an explicit timestamp.
///
/// Defaults:
/// - action: `"Test action"`
/// - created_at: now
pub struct UsageFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    action: String,
    created_at: DateTime<Utc>,
}

impl<'a> UsageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: u64) -> Self {
        Self {
            db,
            user_id,
            action: "Test action".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Shifts the timestamp relative to now, e.g. `-60` for a minute ago.
    pub fn seconds_from_now(mut self, seconds: i64) -> Self {
        self.created_at = Utc::now() + Duration::seconds(seconds);
        self
    }

    pub async fn build(self) -> Result<entity::api_usage::Model, DbErr> {
        entity::api_usage::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
            created_at: ActiveValue::Set(self.created_at),
            action: ActiveValue::Set(self.action),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a usage row for `user_id` stamped now.
pub async fn create_usage(
    db: &DatabaseConnection,
    user_id: u64,
    action: &str,
) -> Result<entity::api_usage::Model, DbErr> {
    UsageFactory::new(db, user_id).action(action).build().await
}
