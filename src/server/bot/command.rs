//! `/rust` slash command definition, parsing and execution.

use serenity::all::{
    CommandDataOption, CommandDataOptionValue, CommandOptionType, CreateCommand,
    CreateCommandOption,
};
use std::collections::HashMap;

use crate::server::{
    bot::reply::{
        format_info, format_list, format_usage, Reply, INVALID_USER_ID, NO_PERMISSION,
    },
    error::AppError,
    service::api_user::ApiUserService,
    util::parse::parse_discord_id,
};

/// Name of the top-level slash command.
pub const COMMAND_NAME: &str = "rust";

/// Builds the `/rust` command with its six subcommands for registration.
pub fn create_command() -> CreateCommand {
    let user_option = |description: &str| {
        CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
    };

    CreateCommand::new(COMMAND_NAME)
        .description("Rust commands")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Grant api key")
                .add_sub_option(user_option("User to grant key to"))
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "steam",
                        "Users steam name",
                    )
                    .required(true),
                ),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "remove", "Revoke api key")
                .add_sub_option(user_option("User to revoke key from")),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List api holders and usage",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "info", "Get info about a user")
                .add_sub_option(user_option("User to get info about")),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "usage",
                "List api usage for a user",
            )
            .add_sub_option(user_option("User to list usage for")),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "removeid",
                "Remove a user by id",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "id", "Id of user to remove")
                    .required(true),
            ),
        )
}

/// A parsed `/rust` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    Add { user_id: u64, steam: String },
    Remove { user_id: u64 },
    /// Raw ID text, parsed when executed so a bad ID gets a reply instead of an error.
    RemoveId { id: String },
    Info { user_id: u64 },
    List,
    Usage { user_id: u64 },
}

impl AdminCommand {
    /// Parses the interaction options of a `/rust` invocation.
    ///
    /// # Returns
    /// - `Ok(AdminCommand)` - Known subcommand with all required options
    /// - `Err(AppError::BadRequest)` - Unknown subcommand or missing option
    pub fn parse(options: &[CommandDataOption]) -> Result<Self, AppError> {
        let [subcommand] = options else {
            return Err(AppError::BadRequest("Expected a single subcommand".to_string()));
        };

        let CommandDataOptionValue::SubCommand(args) = &subcommand.value else {
            return Err(AppError::BadRequest(format!(
                "Option '{}' is not a subcommand",
                subcommand.name
            )));
        };

        let command = match subcommand.name.as_str() {
            "add" => Self::Add {
                user_id: user_arg(args, "user")?,
                steam: string_arg(args, "steam")?,
            },
            "remove" => Self::Remove {
                user_id: user_arg(args, "user")?,
            },
            "removeid" => Self::RemoveId {
                id: string_arg(args, "id")?,
            },
            "info" => Self::Info {
                user_id: user_arg(args, "user")?,
            },
            "list" => Self::List,
            "usage" => Self::Usage {
                user_id: user_arg(args, "user")?,
            },
            other => {
                return Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other)));
            }
        };

        Ok(command)
    }

    /// Runs the subcommand and builds the reply.
    ///
    /// # Arguments
    /// - `service` - Token lifecycle service
    /// - `names` - Display names of users resolved in the interaction, keyed by ID
    pub async fn execute(self, service: &ApiUserService<'_>, names: &HashMap<u64, String>) -> Reply {
        let display_name = |user_id: u64| {
            names
                .get(&user_id)
                .cloned()
                .unwrap_or_else(|| user_id.to_string())
        };

        let result = match self {
            Self::Add { user_id, steam } => service
                .add(user_id, &steam)
                .await
                .map(|issued| Reply::Text(format!("User added. Token: {}", issued.token))),
            Self::Remove { user_id } => service
                .remove(user_id)
                .await
                .map(|_| Reply::Text("User removed".to_string())),
            Self::RemoveId { id } => match parse_discord_id(&id) {
                Some(user_id) => service
                    .remove(user_id)
                    .await
                    .map(|_| Reply::Text("User removed".to_string())),
                None => Ok(Reply::Text(INVALID_USER_ID.to_string())),
            },
            Self::Info { user_id } => match service.info(user_id).await {
                Ok((summary, last_used)) => {
                    let persona = service.persona_name(&summary.credential).await;
                    Ok(format_info(
                        &display_name(user_id),
                        &summary,
                        persona.as_deref(),
                        last_used.as_ref(),
                    ))
                }
                Err(e) => Err(e),
            },
            Self::List => service.list().await.map(|summaries| format_list(&summaries)),
            Self::Usage { user_id } => service
                .usage(user_id)
                .await
                .map(|records| format_usage(&display_name(user_id), &records)),
        };

        result.unwrap_or_else(Reply::from_error)
    }
}

/// Whether a member with `member_roles` may use the admin command.
pub fn is_authorized(member_roles: Option<&[serenity::all::RoleId]>, role_id: u64) -> bool {
    member_roles.is_some_and(|roles| roles.iter().any(|role| role.get() == role_id))
}

/// Reply for invokers without the admin role.
pub fn unauthorized_reply() -> Reply {
    Reply::Text(NO_PERMISSION.to_string())
}

fn user_arg(args: &[CommandDataOption], name: &str) -> Result<u64, AppError> {
    match args.iter().find(|o| o.name == name).map(|o| &o.value) {
        Some(CommandDataOptionValue::User(user_id)) => Ok(user_id.get()),
        _ => Err(AppError::BadRequest(format!("Missing user option '{}'", name))),
    }
}

fn string_arg(args: &[CommandDataOption], name: &str) -> Result<String, AppError> {
    match args.iter().find(|o| o.name == name).map(|o| &o.value) {
        Some(CommandDataOptionValue::String(value)) => Ok(value.clone()),
        _ => Err(AppError::BadRequest(format!("Missing string option '{}'", name))),
    }
}
