use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready, ResumedEvent, ShardStageUpdateEvent};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::service::{gateway::GatewayStatus, steam::SteamClient};

pub mod connection;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub steam: SteamClient,
    pub gateway: GatewayStatus,
    /// Guild the `/rust` command is registered in.
    pub guild_id: u64,
    /// Role required to use the `/rust` command.
    pub role_id: u64,
    pub secret: Arc<str>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.gateway, self.guild_id, ctx, ready).await;
    }

    /// Called when a dropped session is resumed
    async fn resume(&self, ctx: Context, resumed: ResumedEvent) {
        connection::handle_resume(&self.gateway, ctx, resumed).await;
    }

    /// Called whenever a shard moves between connection stages
    async fn shard_stage_update(&self, ctx: Context, event: ShardStageUpdateEvent) {
        connection::handle_shard_stage_update(&self.gateway, ctx, event).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(self, ctx, interaction).await;
    }
}
