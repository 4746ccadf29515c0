use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a request fails token authentication.
///
/// The variants exist for logging; clients receive the same body for every
/// credential failure so user IDs cannot be enumerated.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The Discord gateway is not connected, so commands cannot be delivered.
    #[error("Discord client is not ready")]
    ServiceUnavailable,

    /// The request carried no `Authorization` header.
    #[error("Missing authorization header")]
    MissingHeader,

    /// The header was not base64 of exactly `user:token`.
    #[error("Invalid authorization header")]
    MalformedHeader,

    /// No credential is stored for the user part of the header.
    #[error("Invalid user '{0}'")]
    UnknownUser(String),

    /// The token digest did not match the stored hash.
    #[error("Invalid token for user {0}")]
    InvalidToken(u64),
}

/// Converts authentication errors into HTTP responses.
///
/// The gateway state maps to 500 like any other service fault. All credential
/// failures map to an identical 401 and the specific reason is only logged at
/// debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::ServiceUnavailable => {
                tracing::warn!("Rejected request: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Discord client is not ready".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Rejected request: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
