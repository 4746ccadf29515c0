//! Fake Steam Web API for tests.
//!
//! Serves the two `ISteamUser` endpoints the relay calls from an axum server bound to an
//! ephemeral localhost port. Responses mirror the shape of the real API closely enough
//! for deserialization: unknown vanity names answer `success: 42` and unknown Steam IDs
//! answer an empty `players` array.

use axum::{extract::Query, extract::State, routing::get, Json, Router};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use crate::error::TestError;

#[derive(Default)]
struct FakeSteamData {
    vanity: HashMap<String, String>,
    personas: HashMap<String, String>,
    requests: AtomicUsize,
}

/// Builder for a fake Steam API with known vanity names and profiles.
///
/// ```rust,ignore
/// let steam = FakeSteamBuilder::new()
///     .with_player("validvanity", "76561197960287930", "Alice")
///     .start()
///     .await?;
///
/// let client = SteamClient::with_base_url(reqwest::Client::new(), "key", steam.base_url());
/// ```
#[derive(Default)]
pub struct FakeSteamBuilder {
    data: FakeSteamData,
}

impl FakeSteamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vanity name that resolves to `steam_id`, and a profile for it.
    pub fn with_player(mut self, vanity: &str, steam_id: &str, persona_name: &str) -> Self {
        self.data
            .vanity
            .insert(vanity.to_string(), steam_id.to_string());
        self.data
            .personas
            .insert(steam_id.to_string(), persona_name.to_string());
        self
    }

    /// Registers a vanity name whose Steam ID has no public profile.
    pub fn with_vanity_only(mut self, vanity: &str, steam_id: &str) -> Self {
        self.data
            .vanity
            .insert(vanity.to_string(), steam_id.to_string());
        self
    }

    /// Binds the server on `127.0.0.1:0` and serves it on a background task.
    pub async fn start(self) -> Result<FakeSteam, TestError> {
        let data = Arc::new(self.data);

        let router = Router::new()
            .route("/ISteamUser/ResolveVanityURL/v0001/", get(resolve_vanity))
            .route("/ISteamUser/GetPlayerSummaries/v0002/", get(player_summaries))
            .with_state(data.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(FakeSteam { addr, data })
    }
}

/// Handle to a running fake Steam API.
pub struct FakeSteam {
    addr: SocketAddr,
    data: Arc<FakeSteamData>,
}

impl FakeSteam {
    /// Base URL to pass to the Steam client under test.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests served so far.
    pub fn requests(&self) -> usize {
        self.data.requests.load(Ordering::SeqCst)
    }
}

async fn resolve_vanity(
    State(data): State<Arc<FakeSteamData>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    data.requests.fetch_add(1, Ordering::SeqCst);

    let steam_id = params
        .get("vanityurl")
        .and_then(|name| data.vanity.get(name));

    Json(match steam_id {
        Some(id) => serde_json::json!({ "response": { "steamid": id, "success": 1 } }),
        None => serde_json::json!({ "response": { "success": 42, "message": "No match" } }),
    })
}

async fn player_summaries(
    State(data): State<Arc<FakeSteamData>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    data.requests.fetch_add(1, Ordering::SeqCst);

    let players: Vec<serde_json::Value> = params
        .get("steamids")
        .into_iter()
        .flat_map(|ids| ids.split(','))
        .filter_map(|id| {
            data.personas.get(id).map(|name| {
                serde_json::json!({
                    "steamid": id,
                    "personaname": name,
                    "profileurl": format!("https://steamcommunity.com/profiles/{}/", id),
                    "avatarfull": "https://avatars.steamstatic.com/full.jpg",
                })
            })
        })
        .collect();

    Json(serde_json::json!({ "response": { "players": players } }))
}
