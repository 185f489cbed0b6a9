//! Document date extraction.

use super::patterns::DATE_PATTERN;

/// First date-looking substring, returned exactly as written.
///
/// Matches `DD.MM.YYYY` (also `/` and `-` separators) and ISO `YYYY-MM-DD`.
/// The match is not checked for calendar validity and is not normalized.
pub fn extract_date(text: &str) -> Option<String> {
    DATE_PATTERN.find(text).map(|m| m.as_str().to_string())
}
