use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://user.db?mode=rwc";
const DEFAULT_COMMANDS_PATH: &str = "./commands.json";

pub struct Config {
    pub database_url: String,
    pub commands_path: String,
    pub port: u16,

    pub discord_bot_token: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub role_id: u64,

    /// Secret prepended to every token before hashing.
    pub secret: String,
    pub steam_api_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: optional_var("DATABASE_URL", DEFAULT_DATABASE_URL),
            commands_path: optional_var("COMMANDS_PATH", DEFAULT_COMMANDS_PATH),
            port: parse_var("PORT")?,
            discord_bot_token: required_var("DISCORD_TOKEN")?,
            guild_id: parse_var("GUILD_ID")?,
            channel_id: parse_var("CHANNEL_ID")?,
            role_id: parse_var("ROLE_ID")?,
            secret: required_var("SECRET")?,
            steam_api_token: required_var("STEAM_TOKEN")?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(name: &str) -> Result<T, ConfigError> {
    let value = required_var(name)?;
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
