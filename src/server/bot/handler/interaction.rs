//! Slash command interaction handler.

use serenity::all::{CommandInteraction, Context, Interaction};
use std::collections::HashMap;

use crate::server::{
    bot::{
        command::{is_authorized, unauthorized_reply, AdminCommand, COMMAND_NAME},
        handler::Handler,
        reply::Reply,
    },
    service::api_user::ApiUserService,
};

/// Handles an interaction, answering `/rust` invocations and ignoring everything else.
///
/// Every reply is ephemeral. Invokers without the admin role get a refusal and the
/// subcommand is not run.
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != COMMAND_NAME {
        return;
    }

    let reply = run_command(handler, &command).await;

    if let Err(e) = command.create_response(&ctx.http, reply.into_response()).await {
        tracing::error!("Failed to respond to /{} interaction: {:?}", COMMAND_NAME, e);
    }
}

async fn run_command(handler: &Handler, command: &CommandInteraction) -> Reply {
    let roles = command.member.as_ref().map(|member| member.roles.as_slice());
    if !is_authorized(roles, handler.role_id) {
        tracing::debug!(
            "User {} attempted /{} without the admin role",
            command.user.id,
            COMMAND_NAME
        );
        return unauthorized_reply();
    }

    let admin_command = match AdminCommand::parse(&command.data.options) {
        Ok(admin_command) => admin_command,
        Err(e) => return Reply::from_error(e),
    };

    tracing::info!("User {} ran /{} {:?}", command.user.id, COMMAND_NAME, admin_command);

    let names: HashMap<u64, String> = command
        .data
        .resolved
        .users
        .iter()
        .map(|(id, user)| (id.get(), user.name.clone()))
        .collect();

    let service = ApiUserService::new(&handler.db, &handler.steam, &handler.secret);
    admin_command.execute(&service, &names).await
}
