//! Credential factory for creating `api_user` rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test credentials with customizable fields.
///
/// Defaults:
/// - user_id: auto-incremented
/// - steam_id: `7656119800000000{id}`
/// - token_hash: 64 zeroes, which no real token hashes to
pub struct CredentialFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: u64,
    steam_id: String,
    token_hash: String,
}

impl<'a> CredentialFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id,
            steam_id: format!("7656119800000000{}", id),
            token_hash: "0".repeat(64),
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.steam_id = steam_id.into();
        self
    }

    pub fn token_hash(mut self, token_hash: impl Into<String>) -> Self {
        self.token_hash = token_hash.into();
        self
    }

    /// Builds and inserts the credential.
    ///
    /// # Returns
    /// - `Ok(entity::api_user::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::api_user::Model, DbErr> {
        entity::api_user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id.to_string()),
            steam_id: ActiveValue::Set(self.steam_id),
            token_hash: ActiveValue::Set(self.token_hash),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a credential with default values.
///
/// Shorthand for `CredentialFactory::new(db).build().await`.
pub async fn create_credential(db: &DatabaseConnection) -> Result<entity::api_user::Model, DbErr> {
    CredentialFactory::new(db).build().await
}
