//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Marks the gateway as ready, which opens
//! the HTTP API, and registers the `/rust` command in the configured guild.

use serenity::all::{Context, GuildId, Ready};

use crate::server::{
    bot::command::create_command, model::gateway::ConnectionState,
    service::gateway::GatewayStatus,
};

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration failure is logged rather than fatal; the HTTP API keeps
/// working without the admin command.
///
/// # Arguments
/// - `gateway` - Shared connection state to mark ready
/// - `guild_id` - Guild to register the `/rust` command in
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(gateway: &GatewayStatus, guild_id: u64, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    gateway.set(ConnectionState::Ready).await;

    match GuildId::new(guild_id)
        .set_commands(&ctx.http, vec![create_command()])
        .await
    {
        Ok(commands) => {
            tracing::info!(
                "Registered {} slash command(s) in guild {}",
                commands.len(),
                guild_id
            )
        }
        Err(e) => tracing::error!("Failed to register commands in guild {}: {:?}", guild_id, e),
    }
}
