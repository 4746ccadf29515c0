//! Placeholder substitution for command templates.

use regex::{Captures, Regex};
use std::{collections::HashMap, sync::LazyLock};

use crate::server::error::template::TemplateError;

/// Key under which the caller's Steam persona name is injected.
pub const STEAM_NAME_KEY: &str = "steamName";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("placeholder pattern is valid"));

/// Replaces every `%key%` in `template` with `args[key]`.
///
/// Matches are non-overlapping and scanned left to right. Text that does not form a
/// placeholder, such as a lone `%`, is copied through unchanged.
///
/// # Returns
/// - `Ok(String)` - The rendered command
/// - `Err(TemplateError::MissingArgument)` - The first placeholder with no value in `args`
pub fn render(template: &str, args: &HashMap<String, String>) -> Result<String, TemplateError> {
    if let Some(missing) = PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|key| !args.contains_key(key))
    {
        return Err(TemplateError::MissingArgument(missing));
    }

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        args.get(&caps[1]).cloned().unwrap_or_default()
    });

    Ok(rendered.into_owned())
}

/// Renders a template with the caller's arguments plus their Steam persona name.
///
/// The persona name always wins over a caller-supplied `steamName`.
pub fn render_with_steam_name(
    template: &str,
    mut args: HashMap<String, String>,
    steam_name: &str,
) -> Result<String, TemplateError> {
    args.insert(STEAM_NAME_KEY.to_string(), steam_name.to_string());
    render(template, &args)
}
