//! Shared regex patterns for document field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Dates: DD.MM.YYYY (also / and - separators) or ISO YYYY-MM-DD
    pub static ref DATE_PATTERN: Regex = Regex::new(
        r"\b\d{2}[./\-]\d{2}[./\-]\d{4}\b|\b\d{4}-\d{2}-\d{2}\b"
    ).unwrap();

    // Monetary tokens: grouped thousands with a decimal comma (1 234,56 /
    // 1.234,56) or a bare digit run. The grouped alternative must come
    // first: it wins at any digit position, so a dot-decimal like 120.00
    // tokenizes as 120 and the dot stays a thousands separator for parsing.
    pub static ref NUMBER_PATTERN: Regex = Regex::new(
        r"[0-9]{1,3}(?:[ .][0-9]{3})*(?:,[0-9]{1,2})?|[0-9]+(?:\.[0-9]{1,2})?"
    ).unwrap();
}
