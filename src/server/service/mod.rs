//! Business logic layer.
//!
//! Services orchestrate repositories and external clients (Steam, Discord) and are
//! shared by the HTTP controllers and the bot's slash-command handlers.

pub mod api_user;
pub mod command;
pub mod discord;
pub mod gateway;
pub mod steam;
pub mod template;
pub mod token;

#[cfg(test)]
mod test;
