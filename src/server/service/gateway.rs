//! Shared view of the Discord gateway connection.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::model::gateway::ConnectionState;

/// Connection state shared between the bot's event handler (writer) and the HTTP
/// authentication guard (reader).
#[derive(Clone, Default)]
pub struct GatewayStatus {
    state: Arc<RwLock<ConnectionState>>,
}

impl GatewayStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> ConnectionState {
        *self.state.read().await
    }

    pub async fn set(&self, state: ConnectionState) {
        let mut current = self.state.write().await;
        if *current != state {
            tracing::debug!("Discord gateway state {:?} -> {:?}", *current, state);
            *current = state;
        }
    }

    pub async fn is_ready(&self) -> bool {
        self.get().await == ConnectionState::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_disconnected() {
        let status = GatewayStatus::new();
        assert_eq!(status.get().await, ConnectionState::Disconnected);
        assert!(!status.is_ready().await);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let status = GatewayStatus::new();
        let reader = status.clone();

        status.set(ConnectionState::Connecting).await;
        assert!(!reader.is_ready().await);

        status.set(ConnectionState::Ready).await;
        assert!(reader.is_ready().await);
    }
}
