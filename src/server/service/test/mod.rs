use crate::server::{error::AppError, service::steam::SteamClient};
use test_utils::steam::{FakeSteam, FakeSteamBuilder};


const SECRET: &str = "test-secret";
const STEAM_ID: &str = "76561197960287930";

/// Starts a fake Steam API knowing `validvanity` -> Alice and returns a client for it.
async fn fake_steam() -> (SteamClient, FakeSteam) {
    let steam = FakeSteamBuilder::new()
        .with_player("validvanity", STEAM_ID, "Alice")
        .start()
        .await
        .unwrap();
    let client = SteamClient::with_base_url(reqwest::Client::new(), "test-key", steam.base_url());
    (client, steam)
}
