//! Document analysis: classification and field extraction.

mod analyzer;
pub mod rules;

pub use analyzer::DocumentAnalyzer;
