//! API user service for token lifecycle management.
//!
//! This module provides the `ApiUserService` behind the administrative slash commands.
//! It issues and revokes tokens and reports usage, orchestrating the credential and
//! usage repositories and the Steam client.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{credential::CredentialRepository, usage::UsageRepository},
    error::AppError,
    model::{
        credential::{CreateCredentialParam, Credential, CredentialSummary, IssuedToken},
        usage::UsageRecord,
    },
    service::{
        steam::SteamClient,
        token::{generate_token, hash_token},
    },
};

/// Usage action logged when a token is issued.
pub const GENERATE_KEY_ACTION: &str = "Generate key";

/// Service providing business logic for API token holders.
pub struct ApiUserService<'a> {
    db: &'a DatabaseConnection,
    steam: &'a SteamClient,
    secret: &'a str,
}

impl<'a> ApiUserService<'a> {
    /// Creates a new ApiUserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `steam` - Steam client for vanity name resolution
    /// - `secret` - Server secret used when hashing tokens
    pub fn new(db: &'a DatabaseConnection, steam: &'a SteamClient, secret: &'a str) -> Self {
        Self { db, steam, secret }
    }

    /// Issues a new API token to a Discord user.
    ///
    /// Rejects users who already hold a token before contacting Steam, so a repeat
    /// `add` fails the same way whatever Steam name is supplied. The credential insert
    /// and the `Generate key` usage row are separate statements.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user receiving the token
    /// - `steam_name` - Steam vanity URL name of the user
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Stored credential plus the plaintext token, shown once
    /// - `Err(AppError::Conflict)` - The user already has a token
    /// - `Err(AppError::BadRequest)` - The Steam name does not resolve
    /// - `Err(AppError)` - Steam request or database failure
    pub async fn add(&self, user_id: u64, steam_name: &str) -> Result<IssuedToken, AppError> {
        let credential_repo = CredentialRepository::new(self.db);
        let usage_repo = UsageRepository::new(self.db);

        if credential_repo.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let resolution = self.steam.resolve_vanity_name(steam_name).await?;
        let Some(steam_id) = resolution.steam_id.filter(|_| resolution.success) else {
            return Err(AppError::BadRequest("Invalid steam user".to_string()));
        };

        let token = generate_token();
        let credential = credential_repo
            .create(CreateCredentialParam {
                user_id,
                steam_id,
                token_hash: hash_token(self.secret, &token),
            })
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent add for the same user.
                AppError::DbErr(ref db_err)
                    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    AppError::Conflict("User already exists".to_string())
                }
                e => e,
            })?;

        usage_repo.record(user_id, GENERATE_KEY_ACTION).await?;

        let issued = IssuedToken { credential, token };

        tracing::info!(
            "Issued API token to user {} for Steam ID {}",
            issued.credential.user_id,
            issued.credential.steam_id
        );

        Ok(issued)
    }

    /// Revokes a user's token and deletes their usage history.
    ///
    /// # Returns
    /// - `Ok(())` - Credential and usage rows removed
    /// - `Err(AppError::NotFound)` - The user has no token
    /// - `Err(AppError::DbErr)` - Database error during lookup or delete
    pub async fn remove(&self, user_id: u64) -> Result<(), AppError> {
        let credential_repo = CredentialRepository::new(self.db);
        let usage_repo = UsageRepository::new(self.db);

        if credential_repo.find_by_user_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User does not exist".to_string()));
        }

        credential_repo.delete(user_id).await?;
        let removed_usage = usage_repo.delete_by_user(user_id).await?;

        tracing::info!(
            "Revoked API token of user {} ({} usage records removed)",
            user_id,
            removed_usage
        );

        Ok(())
    }

    /// Gets a user's credential with their usage count and most recent usage.
    ///
    /// # Returns
    /// - `Ok((CredentialSummary, Option<UsageRecord>))` - Summary and latest usage, if any
    /// - `Err(AppError::NotFound)` - The user has no token
    pub async fn info(
        &self,
        user_id: u64,
    ) -> Result<(CredentialSummary, Option<UsageRecord>), AppError> {
        let credential_repo = CredentialRepository::new(self.db);
        let usage_repo = UsageRepository::new(self.db);

        let Some(credential) = credential_repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound("User does not exist".to_string()));
        };

        let usage = usage_repo.get_by_user(user_id).await?;
        let usage_count = usage.len() as u64;
        let last_used = usage.into_iter().last();

        Ok((
            CredentialSummary {
                credential,
                usage_count,
            },
            last_used,
        ))
    }

    /// Fetches the Steam persona name for a credential, if Steam has a profile for it.
    ///
    /// Lookup failures are logged and reported as `None` so a Steam outage does not
    /// hide the rest of an `info` reply.
    pub async fn persona_name(&self, credential: &Credential) -> Option<String> {
        match self.steam.fetch_profile(&credential.steam_id).await {
            Ok(profile) => profile.map(|p| p.persona_name),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch Steam profile {}: {}",
                    credential.steam_id,
                    e
                );
                None
            }
        }
    }

    /// Lists every token holder with their usage count.
    pub async fn list(&self) -> Result<Vec<CredentialSummary>, AppError> {
        let credential_repo = CredentialRepository::new(self.db);
        let usage_repo = UsageRepository::new(self.db);

        let mut summaries = Vec::new();
        for credential in credential_repo.get_all().await? {
            let usage_count = usage_repo.count_by_user(credential.user_id).await?;
            summaries.push(CredentialSummary {
                credential,
                usage_count,
            });
        }

        Ok(summaries)
    }

    /// Gets a user's usage history, oldest first.
    ///
    /// Returns an empty list for users without a token rather than an error.
    pub async fn usage(&self, user_id: u64) -> Result<Vec<UsageRecord>, AppError> {
        UsageRepository::new(self.db).get_by_user(user_id).await
    }
}
