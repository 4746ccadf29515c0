use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory,
    steam::{FakeSteam, FakeSteamBuilder},
};
use tower::ServiceExt;

use crate::server::{
    model::gateway::ConnectionState,
    router::router,
    service::{
        discord::channel::RecordingChannelSender, gateway::GatewayStatus, steam::SteamClient,
        token::hash_token,
    },
    state::AppState,
};


const SECRET: &str = "test-secret";
const TOKEN: &str = "0123456789abcdef0123456789abcdef";
const STEAM_ID: &str = "76561197960287930";
const TEMPLATES: &str = r#"[
    {"name":"greet","command":"hello %steamName%"},
    {"name":"kick","command":"kick %target%"}
]"#;

/// Running API with one registered user (42) and a recording channel.
struct TestApi {
    router: Router,
    channel: Arc<RecordingChannelSender>,
    steam: FakeSteam,
    gateway: GatewayStatus,
    db: DatabaseConnection,
    _test: TestContext,
}

async fn setup(test_name: &str) -> TestApi {
    let test = TestBuilder::new()
        .with_credential_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    factory::credential::CredentialFactory::new(&db)
        .user_id(42)
        .steam_id(STEAM_ID)
        .token_hash(hash_token(SECRET, TOKEN))
        .build()
        .await
        .unwrap();

    let steam = FakeSteamBuilder::new()
        .with_player("alice", STEAM_ID, "Alice")
        .start()
        .await
        .unwrap();
    let steam_client =
        SteamClient::with_base_url(reqwest::Client::new(), "test-key", steam.base_url());

    let commands_path = std::env::temp_dir().join(format!(
        "command-relay-api-{}-{}.json",
        test_name,
        std::process::id()
    ));
    std::fs::write(&commands_path, TEMPLATES).unwrap();

    let gateway = GatewayStatus::new();
    gateway.set(ConnectionState::Ready).await;
    let channel = Arc::new(RecordingChannelSender::default());

    let state = AppState::new(
        db.clone(),
        steam_client,
        gateway.clone(),
        channel.clone(),
        SECRET,
        commands_path.to_string_lossy().into_owned(),
    );

    TestApi {
        router: router(state),
        channel,
        steam,
        gateway,
        db,
        _test: test,
    }
}

fn auth_header(user: &str, token: &str) -> String {
    format!("Bearer {}", STANDARD.encode(format!("{}:{}", user, token)))
}

fn command_request(auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
