use axum::{middleware, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::command::execute_command, middleware::auth::require_token, state::AppState,
};

/// Builds the HTTP API.
///
/// Token authentication runs before the JSON body is parsed, so unauthenticated
/// callers always get a 401 regardless of their payload.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(execute_command))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
