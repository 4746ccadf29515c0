use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteamError {
    /// `GetPlayerSummaries` returned no player for the stored Steam ID.
    #[error("No Steam profile found for {0}")]
    ProfileNotFound(String),

    /// The Steam API base URL could not be combined with an endpoint path.
    #[error("Invalid Steam API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
