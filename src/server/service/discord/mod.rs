//! Outbound Discord operations used outside the bot's event handlers.

pub mod channel;
