//! Counterparty name extraction.

// Words marking a line as a document title rather than a party name.
const TITLE_WORDS: [&str; 2] = ["facture", "invoice"];

/// Pick a counterparty name from the leading lines of the document.
///
/// Scans at most `scan_lines` non-empty trimmed lines and returns the first
/// one of at least three characters that does not look like an invoice
/// title.
pub fn extract_counterparty(text: &str, scan_lines: usize) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(scan_lines)
        .find(|line| {
            let lower = line.to_lowercase();
            line.chars().count() >= 3 && !TITLE_WORDS.iter().any(|word| lower.contains(word))
        })
        .map(str::to_string)
}
