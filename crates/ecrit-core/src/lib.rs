//! Core library for accounting entry inference.
//!
//! This crate reads free-form document text (invoices, receipts, bank
//! statements) and proposes double-entry journal candidates:
//! - document type classification from keyword presence
//! - field extraction (date, counterparty, net/tax/gross amounts)
//! - reconciliation of the three totals into entry lines
//! - heuristic confidence scoring and ranking
//!
//! The engine never fails: malformed input degrades to defaults and a low
//! confidence score, and a human reviewer stays the final arbiter.

pub mod detect;
pub mod engine;
pub mod error;
pub mod models;
pub mod suggest;

pub use detect::DocumentAnalyzer;
pub use engine::{
    Clock, IdGenerator, ParseRequest, ParseResponse, SuggestionEngine, SystemClock, UuidIds,
};
pub use error::{EcritError, EntryError, Result};
pub use models::config::EcritConfig;
pub use models::detection::{Detection, DocumentType};
pub use models::suggestion::{AccountingLine, JournalCode, Suggestion, validate_lines};
