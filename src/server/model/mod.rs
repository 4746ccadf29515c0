//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! are what the service layer and bot handlers work with.

pub mod credential;
pub mod gateway;
pub mod steam;
pub mod template;
pub mod usage;
