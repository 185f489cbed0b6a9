//! Document type classification.

use crate::models::detection::DocumentType;

// Checked in this order; the first family with a hit wins.
const STATEMENT_KEYWORDS: [&str; 1] = ["relevé"];
const RECEIPT_KEYWORDS: [&str; 3] = ["reçu", "receipt", "ticket"];
const INVOICE_KEYWORDS: [&str; 2] = ["facture", "invoice"];

/// Classify a document from keyword presence.
///
/// Case-insensitive single-pass substring lookup, no partial scoring. Total
/// over its input: every string maps to exactly one type.
pub fn classify(text: &str) -> DocumentType {
    let lower = text.to_lowercase();
    if STATEMENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        DocumentType::Statement
    } else if RECEIPT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        DocumentType::Receipt
    } else if INVOICE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        DocumentType::Invoice
    } else {
        DocumentType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_invoices() {
        assert_eq!(classify("FACTURE N° 2024-001"), DocumentType::Invoice);
        assert_eq!(classify("Invoice #42"), DocumentType::Invoice);
    }

    #[test]
    fn recognizes_receipts() {
        assert_eq!(classify("Reçu de paiement"), DocumentType::Receipt);
        assert_eq!(classify("TICKET DE CAISSE"), DocumentType::Receipt);
        assert_eq!(classify("payment receipt"), DocumentType::Receipt);
    }

    #[test]
    fn recognizes_statements() {
        assert_eq!(classify("Relevé bancaire"), DocumentType::Statement);
    }

    #[test]
    fn statement_outranks_invoice() {
        assert_eq!(
            classify("Relevé des factures du mois"),
            DocumentType::Statement
        );
    }

    #[test]
    fn receipt_outranks_invoice() {
        assert_eq!(classify("Reçu pour facture 42"), DocumentType::Receipt);
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(classify(""), DocumentType::Unknown);
        assert_eq!(classify("note de service"), DocumentType::Unknown);
    }
}
