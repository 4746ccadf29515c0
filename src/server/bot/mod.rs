//! Discord bot integration for API token administration.
//!
//! The bot registers the `/rust` slash command in the configured guild and answers its
//! subcommands, which issue, revoke and report on API tokens. Its event handler also
//! tracks the gateway connection state that the HTTP API consults before accepting
//! commands, and its HTTP client is shared with the API to post rendered commands.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is required: slash command interactions are delivered regardless of
//! intents, and role membership comes with the interaction's member payload.

pub mod command;
pub mod handler;
pub mod reply;
pub mod start;
