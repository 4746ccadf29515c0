//! Usage log domain models.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// One audited action taken with a user's credential.
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub user_id: u64,
    /// Free-text description, e.g. `Generate key` or `Execute command: ...`.
    pub action: String,
    pub created_at: DateTime<Utc>,
}

impl UsageRecord {
    /// Converts an entity model to a usage domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(UsageRecord)` - The converted record
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a valid u64
    pub fn from_entity(entity: entity::api_usage::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            action: entity.action,
            created_at: entity.created_at,
        })
    }
}
