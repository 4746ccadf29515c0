//! Token authentication for the command API.
//!
//! `AuthGuard` validates an `Authorization` header against the stored credentials;
//! `require_token` wraps it as an axum middleware that attaches the authenticated
//! `Credential` to the request's extensions for the handler.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::credential::CredentialRepository,
    error::{auth::AuthError, AppError},
    model::credential::Credential,
    service::{gateway::GatewayStatus, token::verify_token},
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Standard base64 that accepts input with or without `=` padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a GatewayStatus,
    secret: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a GatewayStatus, secret: &'a str) -> Self {
        Self {
            db,
            gateway,
            secret,
        }
    }

    /// Authenticates a raw `Authorization` header value.
    ///
    /// The header is `Bearer <base64(user:token)>` or the bare base64 string. Checks
    /// run in order: gateway ready, header present, header well formed, user known,
    /// token matches.
    ///
    /// # Returns
    /// - `Ok(Credential)` - The caller's stored credential
    /// - `Err(AuthError::ServiceUnavailable)` - Discord gateway not ready
    /// - `Err(AuthError::*)` - Missing, malformed, unknown user or wrong token
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self, header: Option<&str>) -> Result<Credential, AppError> {
        if !self.gateway.is_ready().await {
            return Err(AuthError::ServiceUnavailable.into());
        }

        let Some(header) = header else {
            return Err(AuthError::MissingHeader.into());
        };

        let (user, token) = decode_basic_credentials(header)?;

        // Only the canonical decimal form names a user; "042" or "+42" do not.
        let Some(user_id) = user.parse::<u64>().ok().filter(|id| id.to_string() == user) else {
            return Err(AuthError::UnknownUser(user).into());
        };

        let credential_repo = CredentialRepository::new(self.db);
        let Some(credential) = credential_repo.find_by_user_id(user_id).await? else {
            return Err(AuthError::UnknownUser(user).into());
        };

        if !verify_token(self.secret, &token, &credential.token_hash) {
            return Err(AuthError::InvalidToken(user_id).into());
        }

        Ok(credential)
    }
}

/// Splits an `Authorization` header value into `(user, token)`.
///
/// # Returns
/// - `Ok((user, token))` - Both parts non-empty
/// - `Err(AuthError::MalformedHeader)` - Invalid base64 or UTF-8, or the decoded text
///   is not exactly two non-empty parts separated by `:`
pub fn decode_basic_credentials(header: &str) -> Result<(String, String), AuthError> {
    let encoded = header.strip_prefix(BEARER_PREFIX).unwrap_or(header).trim();

    let decoded = LENIENT_BASE64
        .decode(encoded)
        .map_err(|_| AuthError::MalformedHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;

    let parts: Vec<&str> = decoded.split(':').collect();
    match parts.as_slice() {
        [user, token] if !user.is_empty() && !token.is_empty() => {
            Ok((user.to_string(), token.to_string()))
        }
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Axum middleware requiring a valid API token on every request it wraps.
///
/// On success the caller's `Credential` is inserted into the request extensions.
pub async fn require_token(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default().to_string());

    let guard = AuthGuard::new(&state.db, &state.gateway, &state.secret);
    match guard.require(header.as_deref()).await {
        Ok(credential) => {
            req.extensions_mut().insert(credential);
            next.run(req).await
        }
        Err(e) => e.into_response(),
    }
}
