//! SeaORM entity models for the relay's persisted state.
//!
//! Two tables are tracked: `api_user` holds one credential per Discord user and
//! `api_usage` is the append-only audit log of actions taken with those
//! credentials.

pub mod api_usage;
pub mod api_user;
pub mod prelude;
