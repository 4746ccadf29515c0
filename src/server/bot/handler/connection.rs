//! Gateway connection tracking.

use serenity::all::{ConnectionStage, Context, ResumedEvent, ShardStageUpdateEvent};

use crate::server::{model::gateway::ConnectionState, service::gateway::GatewayStatus};

pub async fn handle_resume(gateway: &GatewayStatus, _ctx: Context, _resumed: ResumedEvent) {
    tracing::info!("Discord session resumed");
    gateway.set(ConnectionState::Ready).await;
}

pub async fn handle_shard_stage_update(
    gateway: &GatewayStatus,
    _ctx: Context,
    event: ShardStageUpdateEvent,
) {
    tracing::debug!(
        "Shard {} stage {:?} -> {:?}",
        event.shard_id,
        event.old,
        event.new
    );

    gateway.set(connection_state(&event.new)).await;
}

/// Collapses a shard stage into the state the HTTP API checks.
pub fn connection_state(stage: &ConnectionStage) -> ConnectionState {
    match stage {
        ConnectionStage::Connected => ConnectionState::Ready,
        ConnectionStage::Disconnected => ConnectionState::Disconnected,
        _ => ConnectionState::Connecting,
    }
}
