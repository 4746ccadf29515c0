//! Command template storage.
//!
//! Templates live in a JSON file and are read on every lookup, so edits take effect
//! without restarting the process.

use crate::server::{error::template::TemplateError, model::template::CommandTemplate};

/// Read-only access to the command templates file.
pub struct TemplateRepository<'a> {
    path: &'a str,
}

impl<'a> TemplateRepository<'a> {
    /// Creates a repository reading from `path`.
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    /// Loads every template from the file.
    ///
    /// # Returns
    /// - `Ok(Vec<CommandTemplate>)` - Templates in file order
    /// - `Err(TemplateError::Read)` - File missing or unreadable
    /// - `Err(TemplateError::Parse)` - File is not a JSON list of `{name, command}`
    pub async fn get_all(&self) -> Result<Vec<CommandTemplate>, TemplateError> {
        let contents =
            tokio::fs::read_to_string(self.path)
                .await
                .map_err(|source| TemplateError::Read {
                    path: self.path.to_string(),
                    source,
                })?;

        serde_json::from_str(&contents).map_err(|source| TemplateError::Parse {
            path: self.path.to_string(),
            source,
        })
    }

    /// Finds a template by exact name. The first match wins if names repeat.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CommandTemplate>, TemplateError> {
        let templates = self.get_all().await?;

        Ok(templates.into_iter().find(|t| t.name == name))
    }
}
