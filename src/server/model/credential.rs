//! Credential domain models and parameters.
//!
//! A credential ties a Discord user to a Steam account and the SHA-256 digest of the
//! API token issued to them. The plaintext token only exists in `IssuedToken`, which
//! is handed back to the administrator once and never stored.

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Stored credential for one Discord user.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    /// Discord ID of the user the token belongs to.
    pub user_id: u64,
    /// 64-bit Steam ID the user's commands are attributed to.
    pub steam_id: String,
    /// Hex encoded SHA-256 of the server secret followed by the plaintext token.
    pub token_hash: String,
}

impl Credential {
    /// Converts an entity model to a credential domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Credential)` - The converted credential
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored user ID is not a valid u64
    pub fn from_entity(entity: entity::api_user::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;

        Ok(Self {
            user_id,
            steam_id: entity.steam_id,
            token_hash: entity.token_hash,
        })
    }
}

/// Parameters for storing a new credential.
#[derive(Debug, Clone)]
pub struct CreateCredentialParam {
    pub user_id: u64,
    pub steam_id: String,
    pub token_hash: String,
}

/// Result of issuing a token to a user.
///
/// `token` is the only copy of the plaintext token anywhere in the system.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub credential: Credential,
    pub token: String,
}

/// Credential summary with usage statistics for the `info` and `list` replies.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialSummary {
    pub credential: Credential,
    /// Number of usage rows logged for the user.
    pub usage_count: u64,
}
