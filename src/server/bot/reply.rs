//! Ephemeral replies to `/rust` subcommands.
//!
//! Formatting is kept apart from the interaction plumbing so the reply text can be
//! checked without a Discord connection.

use serenity::all::{CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::server::{
    error::AppError,
    model::{credential::CredentialSummary, usage::UsageRecord},
};

pub const NO_PERMISSION: &str = "You do not have permission to use this command";
pub const INVALID_USER_ID: &str = "User does not exist";
pub const UNKNOWN_STEAM_NAME: &str = "Unknown";
const GENERIC_FAILURE: &str = "Something went wrong while handling the command";

/// Discord rejects embed descriptions longer than this.
const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Content of a reply, rendered as an ephemeral message.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed { title: String, description: String },
}

impl Reply {
    /// Maps a failed subcommand to the message shown to the administrator.
    ///
    /// Expected outcomes such as an unknown user carry their own message. Anything
    /// else is logged and replaced with a generic failure notice.
    pub fn from_error(err: AppError) -> Self {
        match err {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::Conflict(msg) => {
                Self::Text(msg)
            }
            err => {
                tracing::error!("Failed to handle admin command: {}", err);
                Self::Text(GENERIC_FAILURE.to_string())
            }
        }
    }

    /// Builds the interaction response, visible only to the invoker.
    pub fn into_response(self) -> CreateInteractionResponse {
        let message = CreateInteractionResponseMessage::new().ephemeral(true);
        let message = match self {
            Self::Text(content) => message.content(content),
            Self::Embed { title, description } => {
                message.embed(CreateEmbed::new().title(title).description(description))
            }
        };

        CreateInteractionResponse::Message(message)
    }
}

/// Reply for `/rust info`.
///
/// `persona_name` is `None` when Steam has no profile for the stored ID or the
/// lookup failed.
pub fn format_info(
    display_name: &str,
    summary: &CredentialSummary,
    persona_name: Option<&str>,
    last_used: Option<&UsageRecord>,
) -> Reply {
    let last_used = last_used
        .map(discord_timestamp)
        .unwrap_or_else(|| "Never".to_string());

    Reply::Embed {
        title: display_name.to_string(),
        description: format!(
            "Steam: {} (`{}`)\nUsage: {}\nLast used: {}",
            persona_name.unwrap_or(UNKNOWN_STEAM_NAME),
            summary.credential.steam_id,
            summary.usage_count,
            last_used
        ),
    }
}

/// Reply for `/rust list`, one line per token holder.
pub fn format_list(summaries: &[CredentialSummary]) -> Reply {
    let lines: Vec<String> = summaries
        .iter()
        .map(|s| format!("<@{}> - {}", s.credential.user_id, s.usage_count))
        .collect();

    Reply::Embed {
        title: "API users".to_string(),
        description: join_lines(&lines, "No API users"),
    }
}

/// Reply for `/rust usage`, oldest entry first.
pub fn format_usage(display_name: &str, records: &[UsageRecord]) -> Reply {
    let lines: Vec<String> = records
        .iter()
        .map(|r| format!("{} - {}", discord_timestamp(r), r.action))
        .collect();

    Reply::Embed {
        title: format!("Usage for {}", display_name),
        description: join_lines(&lines, "No usage recorded"),
    }
}

/// Discord timestamp markup, rendered in the reader's timezone.
fn discord_timestamp(record: &UsageRecord) -> String {
    format!("<t:{}:f>", record.created_at.timestamp())
}

/// Joins lines for an embed description, dropping trailing lines that would exceed
/// Discord's limit and noting how many were left out.
fn join_lines(lines: &[String], empty: &str) -> String {
    if lines.is_empty() {
        return empty.to_string();
    }

    // Room for the "... and N more" footer.
    let budget = EMBED_DESCRIPTION_LIMIT - 32;
    let mut description = String::new();

    for (shown, line) in lines.iter().enumerate() {
        let separator = usize::from(!description.is_empty());
        if description.len() + separator + line.len() > budget {
            let mut omitted = lines.len() - shown;
            if description.is_empty() {
                description.push_str(truncate_at_char_boundary(line, budget));
                omitted -= 1;
            }
            if omitted > 0 {
                description.push_str(&format!("\n... and {} more", omitted));
            }
            return description;
        }
        if separator == 1 {
            description.push('\n');
        }
        description.push_str(line);
    }

    description
}

fn truncate_at_char_boundary(line: &str, max_len: usize) -> &str {
    let mut end = max_len.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    &line[..end]
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::server::model::credential::Credential;

    fn summary(user_id: u64, usage_count: u64) -> CredentialSummary {
        CredentialSummary {
            credential: Credential {
                user_id,
                steam_id: "76561198000000001".to_string(),
                token_hash: "0".repeat(64),
            },
            usage_count,
        }
    }

    fn record(action: &str, unix: i64) -> UsageRecord {
        UsageRecord {
            user_id: 42,
            action: action.to_string(),
            created_at: Utc.timestamp_opt(unix, 0).unwrap(),
        }
    }

    #[test]
    fn info_shows_persona_count_and_last_use() {
        let last = record("Generate key", 1_700_000_000);
        let reply = format_info("alice", &summary(42, 3), Some("Alice"), Some(&last));

        assert_eq!(
            reply,
            Reply::Embed {
                title: "alice".to_string(),
                description: "Steam: Alice (`76561198000000001`)\nUsage: 3\nLast used: <t:1700000000:f>"
                    .to_string(),
            }
        );
    }

    #[test]
    fn info_without_profile_or_usage() {
        let Reply::Embed { description, .. } = format_info("alice", &summary(42, 0), None, None)
        else {
            panic!("expected embed");
        };

        assert!(description.starts_with("Steam: Unknown (`76561198000000001`)"));
        assert!(description.ends_with("Last used: Never"));
    }

    #[test]
    fn list_mentions_each_holder() {
        let reply = format_list(&[summary(1, 2), summary(3, 0)]);

        assert_eq!(
            reply,
            Reply::Embed {
                title: "API users".to_string(),
                description: "<@1> - 2\n<@3> - 0".to_string(),
            }
        );
    }

    #[test]
    fn empty_list_has_placeholder() {
        let Reply::Embed { description, .. } = format_list(&[]) else {
            panic!("expected embed");
        };
        assert_eq!(description, "No API users");
    }

    #[test]
    fn usage_lists_actions_in_order() {
        let records = [
            record("Generate key", 100),
            record("Execute command: say hi", 200),
        ];
        let reply = format_usage("alice", &records);

        assert_eq!(
            reply,
            Reply::Embed {
                title: "Usage for alice".to_string(),
                description: "<t:100:f> - Generate key\n<t:200:f> - Execute command: say hi"
                    .to_string(),
            }
        );
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let lines: Vec<String> = (0..500).map(|i| format!("line number {:04}", i)).collect();
        let description = join_lines(&lines, "");

        assert!(description.len() <= EMBED_DESCRIPTION_LIMIT);
        assert!(description.starts_with("line number 0000\n"));
        assert!(description.ends_with("more"));
    }

    #[test]
    fn oversized_first_line_is_cut_not_dropped() {
        let long = "é".repeat(EMBED_DESCRIPTION_LIMIT);

        let alone = join_lines(&[long.clone()], "");
        assert!(!alone.is_empty());
        assert!(alone.len() <= EMBED_DESCRIPTION_LIMIT);
        assert!(alone.starts_with('é'));
        assert!(!alone.contains("more"));

        let with_rest = join_lines(&[long, "short".to_string()], "");
        assert!(with_rest.starts_with('é'));
        assert!(with_rest.ends_with("\n... and 1 more"));
        assert!(with_rest.len() <= EMBED_DESCRIPTION_LIMIT);
    }

    #[test]
    fn expected_errors_become_their_message() {
        assert_eq!(
            Reply::from_error(AppError::Conflict("User already exists".to_string())),
            Reply::Text("User already exists".to_string())
        );
        assert_eq!(
            Reply::from_error(AppError::InternalError("boom".to_string())),
            Reply::Text(GENERIC_FAILURE.to_string())
        );
    }
}
