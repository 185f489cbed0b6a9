//! Error types for the ecrit-core library.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ecrit library.
///
/// The inference engine itself has no fallible contract; errors only arise
/// at the edges (configuration files, entry validation at the storage
/// boundary).
#[derive(Error, Debug)]
pub enum EcritError {
    /// Journal entry rejected by validation.
    #[error("entry error: {0}")]
    Entry(#[from] EntryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised when a journal entry is rejected at the storage boundary.
#[derive(Error, Debug)]
pub enum EntryError {
    /// The entry carries no lines at all.
    #[error("entry has no lines")]
    Empty,

    /// Debit and credit totals do not match.
    #[error("entry is unbalanced: debit {debit} != credit {credit}")]
    Unbalanced { debit: Decimal, credit: Decimal },
}

/// Result type for the ecrit library.
pub type Result<T> = std::result::Result<T, EcritError>;
