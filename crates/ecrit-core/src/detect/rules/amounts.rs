//! Monetary amount extraction.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::patterns::NUMBER_PATTERN;

/// Keywords anchoring the net (HT) amount, in priority order.
pub const NET_KEYWORDS: [&str; 3] = ["total ht", "montant ht", "ht"];

/// Keywords anchoring the tax (TVA) amount, in priority order.
pub const TAX_KEYWORDS: [&str; 3] = ["tva", "taxe", "vat"];

/// Keywords anchoring the gross (TTC) amount, in priority order.
pub const GROSS_KEYWORDS: [&str; 6] = [
    "total ttc",
    "ttc",
    "à payer",
    "a payer",
    "net à payer",
    "net a payer",
];

/// Context tag attached to amounts found by the whole-text fallback scan.
pub const AUTO_CONTEXT: &str = "AUTO";

/// An amount located in the text, tagged with what anchored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountMatch {
    /// Parsed amount, rounded to the cent.
    pub value: Decimal,
    /// Upper-cased keyword that anchored the match, or [`AUTO_CONTEXT`].
    pub context: String,
}

/// Keyword-anchored amount search.
///
/// Keywords form a priority list: the first keyword in `keywords` with a
/// numeric token within `window` characters of its first occurrence wins,
/// even when a later keyword appears earlier in the text. With
/// `scan_fallback` set, a document without any keyword hit degrades to the
/// largest numeric token anywhere in the text, tagged [`AUTO_CONTEXT`];
/// without it the search simply reports nothing.
pub fn extract_amount(
    text: &str,
    keywords: &[&str],
    window: usize,
    scan_fallback: bool,
) -> Option<AmountMatch> {
    let lower = text.to_lowercase();
    for keyword in keywords {
        if let Some(idx) = lower.find(keyword) {
            let nearby: String = lower[idx..].chars().take(window).collect();
            if let Some(token) = NUMBER_PATTERN.find(&nearby) {
                return Some(AmountMatch {
                    value: parse_amount(token.as_str()),
                    context: keyword.to_uppercase(),
                });
            }
        }
    }

    if !scan_fallback {
        return None;
    }

    NUMBER_PATTERN
        .find_iter(text)
        .map(|token| parse_amount(token.as_str()))
        .max()
        .map(|value| AmountMatch {
            value,
            context: AUTO_CONTEXT.to_string(),
        })
}

/// Parse a formatted amount ("1 234,56", "1.234,56", "120") into a Decimal.
///
/// Spaces and dots are thousands separators, the comma is the decimal mark.
/// The result is rounded half-up to the cent; anything unparseable degrades
/// to zero rather than propagating an error.
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized = raw.replace([' ', '.'], "").replace(',', ".");
    Decimal::from_str(&normalized)
        .map(|value| value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
