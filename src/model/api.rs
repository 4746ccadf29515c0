use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// Body of `POST /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteCommandDto {
    /// Name of the command template to run.
    pub command: String,
    /// Values for the template's placeholders. `steamName` is always
    /// overwritten with the caller's Steam persona name. Absent and `null`
    /// both mean no arguments.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub args: HashMap<String, String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<HashMap<String, String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
