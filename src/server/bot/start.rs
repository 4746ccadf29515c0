use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, Http};
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler,
    config::Config,
    error::AppError,
    model::gateway::ConnectionState,
    service::{gateway::GatewayStatus, steam::SteamClient},
};

/// Initializes the Discord bot client without connecting to the gateway.
///
/// Returns the client with its HTTP handle so the API can post to Discord through
/// the same session the bot uses.
///
/// # Arguments
/// - `config` - Application configuration with the bot token, guild and admin role
/// - `db` - Database connection for the admin command
/// - `steam` - Steam client for the admin command
/// - `gateway` - Shared connection state the event handler updates
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Bot client and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    steam: SteamClient,
    gateway: GatewayStatus,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler {
        db,
        steam,
        gateway,
        guild_id: config.guild_id,
        role_id: config.role_id,
        secret: Arc::from(config.secret.as_str()),
    };

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway and runs until shutdown.
///
/// Call from within a `tokio::spawn` task. The gateway state is reset to
/// `Disconnected` when the client stops, so the API stops accepting commands.
pub async fn start_bot(mut client: Client, gateway: GatewayStatus) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    gateway.set(ConnectionState::Connecting).await;
    let result = client.start().await;
    gateway.set(ConnectionState::Disconnected).await;

    result?;

    Ok(())
}
