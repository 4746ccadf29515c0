mod model;
mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    config::Config,
    error::AppError,
    router::router,
    service::{
        discord::channel::DiscordChannelSender, gateway::GatewayStatus, steam::SteamClient,
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let steam = SteamClient::new(http_client, config.steam_api_token.clone());
    let gateway = GatewayStatus::new();

    tracing::info!("Starting server");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), steam.clone(), gateway.clone()).await?;

    let bot_gateway = gateway.clone();
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client, bot_gateway).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let channel = DiscordChannelSender::new(discord_http, config.guild_id, config.channel_id);

    let state = AppState::new(
        db,
        steam,
        gateway,
        Arc::new(channel),
        config.secret.as_str(),
        config.commands_path.as_str(),
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;

    Ok(())
}
