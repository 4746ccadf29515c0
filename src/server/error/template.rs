use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template references a placeholder that has no value.
    #[error("Missing argument '{0}'")]
    MissingArgument(String),

    /// The templates file could not be read.
    #[error("Failed to read command templates from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The templates file is not a JSON list of `{name, command}` objects.
    #[error("Failed to parse command templates from {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A missing argument is the caller's fault and is reported back verbatim;
/// load failures are logged and hidden behind a 500.
impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingArgument(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => super::InternalServerError(err).into_response(),
        }
    }
}
