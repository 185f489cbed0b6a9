//! Journal entry suggestion models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EntryError;

/// Journal grouping for a suggested entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JournalCode {
    /// Purchases (achats).
    Ach,
    /// Sales (ventes).
    Ven,
    /// Bank movements (banque).
    Bnk,
    /// Miscellaneous operations (opérations diverses).
    Od,
}

impl JournalCode {
    /// Short code as it appears in journal registries.
    pub fn as_str(&self) -> &'static str {
        match self {
            JournalCode::Ach => "ACH",
            JournalCode::Ven => "VEN",
            JournalCode::Bnk => "BNK",
            JournalCode::Od => "OD",
        }
    }
}

/// One posting of a double-entry suggestion.
///
/// The engine always leaves one of the two sides at zero; the type permits
/// both for entries authored outside the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountingLine {
    /// Account code (e.g. "607").
    pub account: String,

    /// Posting label shown to the bookkeeper.
    pub label: String,

    /// Debit amount.
    pub debit: Decimal,

    /// Credit amount.
    pub credit: Decimal,
}

impl AccountingLine {
    /// Posting with the amount on the debit side.
    pub fn debit(account: impl Into<String>, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            label: label.into(),
            debit: amount,
            credit: Decimal::ZERO,
        }
    }

    /// Posting with the amount on the credit side.
    pub fn credit(account: impl Into<String>, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            account: account.into(),
            label: label.into(),
            debit: Decimal::ZERO,
            credit: amount,
        }
    }
}

/// A candidate journal entry with its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Journal the entry belongs to.
    pub journal: JournalCode,

    /// Piece reference tying the entry to its source document.
    pub piece: String,

    /// Entry date.
    pub date: String,

    /// Ordered entry lines.
    pub lines: Vec<AccountingLine>,

    /// Confidence score in [0, 0.99].
    pub confidence: f64,
}

impl Suggestion {
    /// Sum of all debit amounts.
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|line| line.debit).sum()
    }

    /// Sum of all credit amounts.
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|line| line.credit).sum()
    }

    /// Whether debit and credit totals match to the cent.
    pub fn is_balanced(&self) -> bool {
        validate_lines(&self.lines).is_ok()
    }
}

/// Storage-boundary check: an entry must carry lines and its totals must
/// match to the cent. Manually submitted entries are rejected on failure.
pub fn validate_lines(lines: &[AccountingLine]) -> std::result::Result<(), EntryError> {
    if lines.is_empty() {
        return Err(EntryError::Empty);
    }
    let debit: Decimal = lines.iter().map(|line| line.debit).sum();
    let credit: Decimal = lines.iter().map(|line| line.credit).sum();
    if !(debit - credit)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .is_zero()
    {
        return Err(EntryError::Unbalanced { debit, credit });
    }
    Ok(())
}
