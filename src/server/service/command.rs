//! Command dispatch service.
//!
//! Turns an authenticated HTTP request into a chat message: looks up the named template,
//! resolves the caller's Steam persona name, renders the template and hands the result
//! to the channel sender. Usage logging is left to the caller so it can happen after
//! the response has been sent.

use std::collections::HashMap;

use crate::server::{
    data::template::TemplateRepository,
    error::AppError,
    model::credential::Credential,
    service::{discord::channel::ChannelSender, steam::SteamClient, template::render_with_steam_name},
};

/// Service that executes command templates on behalf of a credential holder.
pub struct CommandService<'a> {
    steam: &'a SteamClient,
    channel: &'a dyn ChannelSender,
    commands_path: &'a str,
}

impl<'a> CommandService<'a> {
    /// Creates a new CommandService instance.
    ///
    /// # Arguments
    /// - `steam` - Steam client for persona name lookups
    /// - `channel` - Destination of rendered commands
    /// - `commands_path` - Path of the command templates file
    pub fn new(
        steam: &'a SteamClient,
        channel: &'a dyn ChannelSender,
        commands_path: &'a str,
    ) -> Self {
        Self {
            steam,
            channel,
            commands_path,
        }
    }

    /// Renders and delivers a command for `credential`.
    ///
    /// The template is looked up before any Steam request, so unknown commands never
    /// reach Steam or Discord.
    ///
    /// # Arguments
    /// - `credential` - Authenticated caller
    /// - `name` - Template name
    /// - `args` - Placeholder values supplied by the caller
    ///
    /// # Returns
    /// - `Ok(String)` - The message that was sent
    /// - `Err(AppError::NotFound)` - No template with that name
    /// - `Err(AppError::SteamErr)` - The caller's Steam profile could not be found
    /// - `Err(AppError::TemplateErr)` - Templates file unreadable or an argument is missing
    /// - `Err(AppError::InternalErr)` - The output channel is unavailable
    pub async fn execute(
        &self,
        credential: &Credential,
        name: &str,
        args: HashMap<String, String>,
    ) -> Result<String, AppError> {
        let template_repo = TemplateRepository::new(self.commands_path);

        let Some(template) = template_repo.find_by_name(name).await? else {
            return Err(AppError::NotFound("Command not found".to_string()));
        };

        let steam_name = self.steam.fetch_persona_name(&credential.steam_id).await?;
        let content = render_with_steam_name(&template.command, args, &steam_name)?;

        self.channel.send(&content).await?;

        tracing::info!(
            "User {} executed command '{}'",
            credential.user_id,
            template.name
        );

        Ok(content)
    }
}

/// Usage action recorded for a delivered command.
pub fn execute_action(content: &str) -> String {
    format!("Execute command: {}", content)
}
