//! Detection result produced by document analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Document type recognized by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Supplier or customer invoice (facture).
    Invoice,
    /// Receipt or till ticket (reçu).
    Receipt,
    /// Bank statement (relevé).
    Statement,
    /// Nothing recognizable.
    #[default]
    Unknown,
}

/// Result of analyzing one document text.
///
/// Built once per input and read-only afterwards. An absent field means the
/// corresponding extractor found nothing; amounts keep their found/not-found
/// state through `Option` rather than a zero sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Classified document type.
    pub doc_type: DocumentType,

    /// Document date exactly as written in the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Counterparty name picked from the document header lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,

    /// Piece reference: the context tag of the first amount extraction that
    /// succeeded (net, then tax, then gross).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub piece: Option<String>,

    /// Net amount (HT), if found.
    pub net: Option<Decimal>,

    /// Tax amount (TVA), if found.
    pub tax: Option<Decimal>,

    /// Gross amount (TTC), if found.
    pub gross: Option<Decimal>,

    /// Lexical cues pointing at a purchase-side entry.
    pub purchase_hints: u32,

    /// Lexical cues pointing at a sale-side entry.
    pub sale_hints: u32,
}
