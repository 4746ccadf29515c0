//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would send in an interaction payload.
//!
//! # Available Factories
//!
//! - `command::create_subcommand` - Slash command options with one subcommand

pub mod command;

pub use command::create_subcommand;
