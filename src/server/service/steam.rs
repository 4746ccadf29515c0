//! Steam Web API client.
//!
//! Provides the two `ISteamUser` lookups the relay needs: resolving a vanity URL name
//! to a 64-bit Steam ID when an administrator issues a token, and fetching a profile's
//! persona name when a command is executed. Requests are made once with the client's
//! default timeouts; nothing is cached or retried.

use url::Url;

use crate::server::{
    error::{steam::SteamError, AppError},
    model::steam::{
        PlayerSummariesResponse, ResolveVanityResponse, SteamEnvelope, SteamProfile,
        VanityResolution,
    },
};

const STEAM_API_URL: &str = "https://api.steampowered.com";
const RESOLVE_VANITY_PATH: &str = "ISteamUser/ResolveVanityURL/v0001/";
const PLAYER_SUMMARIES_PATH: &str = "ISteamUser/GetPlayerSummaries/v0002/";

/// Client for the Steam Web API keyed by the service's API token.
#[derive(Clone)]
pub struct SteamClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SteamClient {
    /// Creates a client targeting the public Steam Web API.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_key` - Steam Web API key sent with every request
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http_client, api_key, STEAM_API_URL)
    }

    /// Creates a client targeting an alternative API host, such as a local fake in tests.
    pub fn with_base_url(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Resolves a vanity URL name (the `name` in `steamcommunity.com/id/name`) to a Steam ID.
    ///
    /// An unknown name is not an error; it yields `success == false`.
    ///
    /// # Returns
    /// - `Ok(VanityResolution)` - Lookup completed, successfully or not
    /// - `Err(AppError::ReqwestErr)` - Request failed or the response was not valid JSON
    pub async fn resolve_vanity_name(&self, name: &str) -> Result<VanityResolution, AppError> {
        let url = self.endpoint(RESOLVE_VANITY_PATH, &[("vanityurl", name)])?;

        let envelope: SteamEnvelope<ResolveVanityResponse> = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.response.into())
    }

    /// Fetches the public profile summary for a Steam ID.
    ///
    /// # Returns
    /// - `Ok(Some(SteamProfile))` - Profile found
    /// - `Ok(None)` - Steam returned no player for that ID
    /// - `Err(AppError::ReqwestErr)` - Request failed or the response was not valid JSON
    pub async fn fetch_profile(&self, steam_id: &str) -> Result<Option<SteamProfile>, AppError> {
        let url = self.endpoint(PLAYER_SUMMARIES_PATH, &[("steamids", steam_id)])?;

        let envelope: SteamEnvelope<PlayerSummariesResponse> = self
            .http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope
            .response
            .players
            .into_iter()
            .find(|p| p.steam_id == steam_id))
    }

    /// Fetches the persona name for a Steam ID, treating a missing profile as an error.
    ///
    /// # Returns
    /// - `Ok(String)` - The profile's persona name
    /// - `Err(AppError::SteamErr(ProfileNotFound))` - Steam returned no player for that ID
    pub async fn fetch_persona_name(&self, steam_id: &str) -> Result<String, AppError> {
        match self.fetch_profile(steam_id).await? {
            Some(profile) => Ok(profile.persona_name),
            None => Err(SteamError::ProfileNotFound(steam_id.to_string()).into()),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, SteamError> {
        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&base)?.join(path)?;

        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .extend_pairs(params.iter().copied())
            .append_pair("format", "json");

        Ok(url)
    }
}

#[cfg(test)]
mod test;
