use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored Discord ID back into a u64.
///
/// IDs are persisted as text, so a failure here means the database holds data
/// the application never wrote.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - The stored value is not a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(source) => Err(InternalError::ParseStringId { value, source }.into()),
    }
}

/// Parses user-supplied text as a Discord snowflake.
///
/// Accepts surrounding whitespace and the `<@id>` / `<@!id>` mention forms an
/// administrator is likely to paste into the `removeid` option.
pub fn parse_discord_id(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix("<@")
        .and_then(|rest| rest.strip_suffix('>'))
        .map(|rest| rest.trim_start_matches('!'))
        .unwrap_or(trimmed);

    inner.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_id() {
        assert_eq!(parse_u64_from_string("42".to_string()).unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_stored_id() {
        let result = parse_u64_from_string("abc".to_string());
        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { ref value, .. })) if value == "abc"
        ));
    }

    #[test]
    fn parses_plain_and_mention_ids() {
        assert_eq!(parse_discord_id("123"), Some(123));
        assert_eq!(parse_discord_id(" 123 "), Some(123));
        assert_eq!(parse_discord_id("<@123>"), Some(123));
        assert_eq!(parse_discord_id("<@!123>"), Some(123));
        assert_eq!(parse_discord_id("user"), None);
        assert_eq!(parse_discord_id(""), None);
    }
}
