use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::api::{ExecuteCommandDto, MessageDto},
    server::{
        data::usage::UsageRepository,
        error::AppError,
        model::credential::Credential,
        service::command::{execute_action, CommandService},
        state::AppState,
    },
};

/// POST / - Execute a command template in the configured Discord channel
///
/// Renders the named template with the request's arguments and the caller's Steam
/// persona name (`%steamName%`), posts it to the channel and responds. The usage
/// record is written on a spawned task after the response is produced.
///
/// # Authentication
/// Requires a valid API token (see `middleware::auth::require_token`)
///
/// # Returns
/// - `200 OK`: `{"message": "Command executed"}`
/// - `400 Bad Request`: A template placeholder has no value
/// - `404 Not Found`: No template with that name
/// - `500 Internal Server Error`: Steam, template file or Discord channel failure
pub async fn execute_command(
    State(state): State<AppState>,
    Extension(credential): Extension<Credential>,
    Json(payload): Json<ExecuteCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    let command_service =
        CommandService::new(&state.steam, state.channel.as_ref(), &state.commands_path);

    let content = command_service
        .execute(&credential, &payload.command, payload.args)
        .await?;

    let db = state.db.clone();
    let user_id = credential.user_id;
    tokio::spawn(async move {
        let usage_repo = UsageRepository::new(&db);
        if let Err(e) = usage_repo.record(user_id, execute_action(&content)).await {
            tracing::error!("Failed to record usage for user {}: {}", user_id, e);
        }
    });

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Command executed".to_string(),
        }),
    ))
}
