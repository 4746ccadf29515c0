//! Test factory for slash command interaction options.

use serenity::all::CommandDataOption;

/// Creates the option list Discord sends for `/<command> <subcommand> ...`.
///
/// Each argument is `(name, discord_option_type, value)`, where the type is the raw
/// Discord option type number (3 = string, 6 = user).
///
/// # Panics
/// - If the JSON cannot be deserialized (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::command::create_subcommand;
///
/// let options = create_subcommand("add", &[("user", 6, "42"), ("steam", 3, "gaben")]);
/// ```
pub fn create_subcommand(name: &str, args: &[(&str, u8, &str)]) -> Vec<CommandDataOption> {
    let options: Vec<serde_json::Value> = args
        .iter()
        .map(|(arg_name, kind, value)| {
            serde_json::json!({
                "name": arg_name,
                "type": kind,
                "value": value,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!([{
        "name": name,
        "type": 1,
        "options": options,
    }]))
    .expect("Failed to deserialize test command options")
}
