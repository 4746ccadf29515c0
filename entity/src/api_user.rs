use sea_orm::entity::prelude::*;

/// Credential issued to a Discord user.
///
/// The Discord snowflake is stored as text so it round-trips without loss
/// through SQLite's signed integer affinity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "api_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub steam_id: String,
    /// Hex encoded SHA-256 of the server secret followed by the plaintext token.
    pub token_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
