//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the HTTP side of the application. The state is initialized
//! once during startup and then cloned for each request handler through Axum's state
//! extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{
    discord::channel::ChannelSender, gateway::GatewayStatus, steam::SteamClient,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `SteamClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `GatewayStatus` and the channel sender are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for credentials and usage records.
    pub db: DatabaseConnection,

    /// Steam Web API client used to resolve the caller's persona name.
    pub steam: SteamClient,

    /// Connection state of the Discord gateway, written by the bot's event handler.
    pub gateway: GatewayStatus,

    /// Destination for rendered commands.
    ///
    /// In production this posts to the configured Discord channel; tests substitute
    /// a recording implementation.
    pub channel: Arc<dyn ChannelSender>,

    /// Secret prepended to API tokens before hashing.
    pub secret: Arc<str>,

    /// Path of the JSON file holding the command templates.
    pub commands_path: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized.
    pub fn new(
        db: DatabaseConnection,
        steam: SteamClient,
        gateway: GatewayStatus,
        channel: Arc<dyn ChannelSender>,
        secret: impl Into<Arc<str>>,
        commands_path: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            db,
            steam,
            gateway,
            channel,
            secret: secret.into(),
            commands_path: commands_path.into(),
        }
    }
}
