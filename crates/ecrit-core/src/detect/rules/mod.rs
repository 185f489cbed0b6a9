//! Rule-based field extractors for accounting documents.

pub mod amounts;
pub mod classify;
pub mod dates;
pub mod hints;
pub mod party;
pub mod patterns;

pub use amounts::{AmountMatch, extract_amount, parse_amount};
pub use classify::classify;
pub use dates::extract_date;
pub use hints::{HintCounts, count_hints};
pub use party::extract_counterparty;
