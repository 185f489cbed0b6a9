//! Document analysis pipeline producing a [`Detection`].

use tracing::debug;

use crate::models::detection::Detection;

use super::rules::{
    amounts::{GROSS_KEYWORDS, NET_KEYWORDS, TAX_KEYWORDS, extract_amount},
    classify::classify,
    dates::extract_date,
    hints::count_hints,
    party::extract_counterparty,
};

/// Rule-based analyzer turning raw document text into a [`Detection`].
///
/// Stateless and pure: each call only reads its input, so a single analyzer
/// may be shared freely between callers.
pub struct DocumentAnalyzer {
    /// How many leading non-empty lines are scanned for a counterparty.
    counterparty_scan_lines: usize,
    /// Character window searched for a number after an amount keyword.
    amount_window: usize,
}

impl DocumentAnalyzer {
    /// Create an analyzer with default settings.
    pub fn new() -> Self {
        Self {
            counterparty_scan_lines: 10,
            amount_window: 120,
        }
    }

    /// Set how many leading non-empty lines are scanned for a counterparty.
    pub fn with_scan_lines(mut self, lines: usize) -> Self {
        self.counterparty_scan_lines = lines;
        self
    }

    /// Set the character window searched for a number after an amount keyword.
    pub fn with_amount_window(mut self, window: usize) -> Self {
        self.amount_window = window;
        self
    }

    /// Analyze one document text.
    pub fn analyze(&self, text: &str) -> Detection {
        let doc_type = classify(text);
        let counterparty = extract_counterparty(text, self.counterparty_scan_lines);
        let date = extract_date(text);

        let net = extract_amount(text, &NET_KEYWORDS, self.amount_window, false);
        let tax = extract_amount(text, &TAX_KEYWORDS, self.amount_window, false);
        // Only the gross search keeps the biggest-number fallback: on a
        // document without any amount keyword, the largest figure is read
        // as the amount due.
        let gross = extract_amount(text, &GROSS_KEYWORDS, self.amount_window, true);

        // First successful extraction tags the piece reference.
        let piece = [&net, &tax, &gross]
            .into_iter()
            .find_map(|found| found.as_ref().map(|m| m.context.clone()));

        let hints = count_hints(text);

        debug!(
            "analyzed {} chars: {:?}, net={}, tax={}, gross={}",
            text.len(),
            doc_type,
            net.is_some(),
            tax.is_some(),
            gross.is_some()
        );

        Detection {
            doc_type,
            date,
            counterparty,
            piece,
            net: net.map(|m| m.value),
            tax: tax.map(|m| m.value),
            gross: gross.map(|m| m.value),
            purchase_hints: hints.purchase,
            sale_hints: hints.sale,
        }
    }
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
