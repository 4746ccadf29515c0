//! Steam Web API response models.
//!
//! Only the fields the relay reads are modelled; everything else in the
//! responses is ignored during deserialization.

use serde::Deserialize;

/// Outcome of resolving a vanity URL name to a Steam ID.
#[derive(Debug, Clone, PartialEq)]
pub struct VanityResolution {
    /// Whether Steam matched the vanity name.
    pub success: bool,
    /// The resolved 64-bit Steam ID, present only when `success` is true.
    pub steam_id: Option<String>,
}

/// Public profile summary of a Steam account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SteamProfile {
    #[serde(rename = "steamid")]
    pub steam_id: String,
    #[serde(rename = "personaname")]
    pub persona_name: String,
    #[serde(rename = "profileurl", default)]
    pub profile_url: Option<String>,
    #[serde(rename = "avatarfull", default)]
    pub avatar: Option<String>,
}

/// Envelope shared by every `ISteamUser` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SteamEnvelope<T> {
    pub response: T,
}

/// `ResolveVanityURL` payload. `success` is 1 on a match and 42 otherwise.
#[derive(Debug, Deserialize)]
pub(crate) struct ResolveVanityResponse {
    pub success: u8,
    #[serde(rename = "steamid", default)]
    pub steam_id: Option<String>,
}

impl From<ResolveVanityResponse> for VanityResolution {
    fn from(value: ResolveVanityResponse) -> Self {
        let success = value.success == 1 && value.steam_id.is_some();
        Self {
            success,
            steam_id: if success { value.steam_id } else { None },
        }
    }
}

/// `GetPlayerSummaries` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct PlayerSummariesResponse {
    #[serde(default)]
    pub players: Vec<SteamProfile>,
}
