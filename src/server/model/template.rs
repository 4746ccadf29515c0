use serde::Deserialize;

/// Named chat command with `%placeholder%` tokens, as stored in the templates file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandTemplate {
    pub name: String,
    pub command: String,
}
