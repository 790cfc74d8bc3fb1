//! `### Event ID` section parsing and validation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::IngestError;

/// Header line, one or more blank lines, then the value line.
static EVENT_ID_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^### Event ID[ \t]*\r?\n(?:[ \t]*\r?\n)+([^\r\n]*\S[^\r\n]*)").unwrap()
});

/// True if `id` is non-empty and only contains `[A-Za-z0-9_-]`.
pub fn is_valid_event_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Extracts the event ID from an issue body, trimmed and validated.
pub fn parse_event_id(body: &str) -> Result<String, IngestError> {
    let caps = EVENT_ID_SECTION
        .captures(body)
        .ok_or(IngestError::MissingSection)?;
    let event_id = caps[1].trim();
    if !is_valid_event_id(event_id) {
        return Err(IngestError::InvalidIdentifier(event_id.to_string()));
    }
    Ok(event_id.to_string())
}
