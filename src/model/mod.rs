//! Data transfer objects exchanged with HTTP callers.

pub mod api;
