use super::*;
use test_utils::steam::FakeSteamBuilder;

const STEAM_ID: &str = "76561197960287930";

async fn client_for(builder: FakeSteamBuilder) -> (SteamClient, test_utils::steam::FakeSteam) {
    let steam = builder.start().await.unwrap();
    let client = SteamClient::with_base_url(reqwest::Client::new(), "test-key", steam.base_url());
    (client, steam)
}

/// Tests resolving a known vanity name.
///
/// Expected: success with the registered Steam ID
#[tokio::test]
async fn resolves_known_vanity_name() -> Result<(), AppError> {
    let (client, _steam) =
        client_for(FakeSteamBuilder::new().with_player("gaben", STEAM_ID, "Gabe")).await;

    let result = client.resolve_vanity_name("gaben").await?;

    assert!(result.success);
    assert_eq!(result.steam_id.as_deref(), Some(STEAM_ID));

    Ok(())
}

/// Tests resolving an unknown vanity name.
///
/// Expected: Ok with success=false and no Steam ID
#[tokio::test]
async fn unknown_vanity_name_fails_softly() -> Result<(), AppError> {
    let (client, _steam) = client_for(FakeSteamBuilder::new()).await;

    let result = client.resolve_vanity_name("nobody").await?;

    assert!(!result.success);
    assert!(result.steam_id.is_none());

    Ok(())
}

/// Tests fetching a profile that exists.
///
/// Expected: Some(profile) with the persona name
#[tokio::test]
async fn fetches_existing_profile() -> Result<(), AppError> {
    let (client, _steam) =
        client_for(FakeSteamBuilder::new().with_player("alice", STEAM_ID, "Alice")).await;

    let profile = client.fetch_profile(STEAM_ID).await?.unwrap();

    assert_eq!(profile.steam_id, STEAM_ID);
    assert_eq!(profile.persona_name, "Alice");
    assert!(profile.profile_url.is_some());

    Ok(())
}

/// Tests fetching a profile that Steam does not return.
///
/// Expected: Ok(None) from fetch_profile and ProfileNotFound from fetch_persona_name
#[tokio::test]
async fn missing_profile_is_reported() -> Result<(), AppError> {
    let (client, _steam) =
        client_for(FakeSteamBuilder::new().with_vanity_only("ghost", STEAM_ID)).await;

    assert!(client.fetch_profile(STEAM_ID).await?.is_none());

    let result = client.fetch_persona_name(STEAM_ID).await;
    assert!(matches!(
        result,
        Err(AppError::SteamErr(SteamError::ProfileNotFound(ref id))) if id == STEAM_ID
    ));

    Ok(())
}

/// Tests that request URLs carry the API key and parameters.
///
/// Expected: key, lookup parameter, and json format in the query string
#[test]
fn builds_endpoint_with_key_and_params() {
    let client = SteamClient::with_base_url(reqwest::Client::new(), "k&y", "http://localhost:1/");

    let url = client
        .endpoint(RESOLVE_VANITY_PATH, &[("vanityurl", "a b")])
        .unwrap();

    assert_eq!(
        url.as_str(),
        "http://localhost:1/ISteamUser/ResolveVanityURL/v0001/?key=k%26y&vanityurl=a+b&format=json"
    );
}
