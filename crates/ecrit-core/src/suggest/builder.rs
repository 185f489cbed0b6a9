//! Reconciliation of extracted amounts and entry assembly.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::detection::{Detection, DocumentType};
use crate::models::suggestion::{AccountingLine, JournalCode, Suggestion};

use super::accounts;

/// Confidence attached to bank movements: without direction information a
/// statement line stays speculative, so no scoring heuristic applies.
const BANK_CONFIDENCE: f64 = 0.4;

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fill in whichever of net/tax/gross is missing via arithmetic.
///
/// Order matters: net is derived first (from gross and tax), then tax (from
/// gross and the net just computed), then gross (net + tax). A document
/// carrying a single field keeps two zeros and a gross equal to that field;
/// that is an accepted approximation, not an error.
pub fn reconcile(net: Decimal, tax: Decimal, gross: Decimal) -> (Decimal, Decimal, Decimal) {
    let net = if net > Decimal::ZERO {
        net
    } else if gross > Decimal::ZERO && tax > Decimal::ZERO {
        round2(gross - tax)
    } else {
        Decimal::ZERO
    };
    let tax = if tax > Decimal::ZERO {
        tax
    } else if gross > Decimal::ZERO && net > Decimal::ZERO {
        round2(gross - net)
    } else {
        Decimal::ZERO
    };
    let gross = if gross > Decimal::ZERO {
        gross
    } else {
        round2(net + tax)
    };
    (net, tax, gross)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntrySide {
    Purchase,
    Sale,
}

// Base 0.5, tax presence weighs most (the strongest structural signal of a
// real invoice), capped below certainty since nothing is checked against
// ground truth.
fn score(detection: &Detection, side: EntrySide) -> f64 {
    let mut score = 0.5;
    if detection.net.is_some() {
        score += 0.1;
    }
    if detection.tax.is_some() {
        score += 0.2;
    }
    if detection.gross.is_some() {
        score += 0.1;
    }
    let hints = match side {
        EntrySide::Purchase => detection.purchase_hints,
        EntrySide::Sale => detection.sale_hints,
    };
    score += 0.1 * f64::from(hints);
    (score.min(0.99) * 100.0).round() / 100.0
}

fn reconciled(detection: &Detection) -> (Decimal, Decimal, Decimal) {
    reconcile(
        detection.net.unwrap_or_default(),
        detection.tax.unwrap_or_default(),
        detection.gross.unwrap_or_default(),
    )
}

fn purchase(detection: &Detection, piece: &str, date: &str) -> Suggestion {
    let (net, tax, gross) = reconciled(detection);
    let supplier = detection
        .counterparty
        .clone()
        .unwrap_or_else(|| accounts::SUPPLIERS.label.to_string());
    Suggestion {
        journal: JournalCode::Ach,
        piece: piece.to_string(),
        date: date.to_string(),
        lines: vec![
            AccountingLine::debit(accounts::PURCHASES.code, accounts::PURCHASES.label, net),
            AccountingLine::debit(
                accounts::VAT_DEDUCTIBLE.code,
                accounts::VAT_DEDUCTIBLE.label,
                tax,
            ),
            AccountingLine::credit(accounts::SUPPLIERS.code, supplier, gross),
        ],
        confidence: score(detection, EntrySide::Purchase),
    }
}

fn sale(detection: &Detection, piece: &str, date: &str) -> Suggestion {
    let (net, tax, gross) = reconciled(detection);
    let customer = detection
        .counterparty
        .clone()
        .unwrap_or_else(|| accounts::CUSTOMERS.label.to_string());
    Suggestion {
        journal: JournalCode::Ven,
        piece: piece.to_string(),
        date: date.to_string(),
        lines: vec![
            AccountingLine::debit(accounts::CUSTOMERS.code, customer, gross),
            AccountingLine::credit(accounts::SALES.code, accounts::SALES.label, net),
            AccountingLine::credit(
                accounts::VAT_COLLECTED.code,
                accounts::VAT_COLLECTED.label,
                tax,
            ),
        ],
        confidence: score(detection, EntrySide::Sale),
    }
}

fn bank(detection: &Detection, piece: &str, date: &str) -> Suggestion {
    // Raw detection values, best one wins: gross, then net, then tax.
    let amount = [detection.gross, detection.net, detection.tax]
        .into_iter()
        .flatten()
        .find(|value| *value > Decimal::ZERO)
        .unwrap_or_default();
    Suggestion {
        journal: JournalCode::Bnk,
        piece: piece.to_string(),
        date: date.to_string(),
        lines: vec![
            AccountingLine::debit(accounts::BANK.code, accounts::BANK.label, amount),
            AccountingLine::credit(accounts::SUSPENSE.code, accounts::SUSPENSE.label, amount),
        ],
        confidence: BANK_CONFIDENCE,
    }
}

/// Generate candidate journal entries for a detection, best first.
///
/// Invoices are direction-ambiguous, so both a purchase and a sale variant
/// are emitted and the ranking plus a human reviewer decide. Receipts and
/// unclassified documents default to the purchase side; statements become a
/// bank movement against the suspense account.
pub fn build_suggestions(detection: &Detection, piece: &str, date: &str) -> Vec<Suggestion> {
    let mut suggestions = match detection.doc_type {
        DocumentType::Invoice => vec![
            purchase(detection, piece, date),
            sale(detection, piece, date),
        ],
        DocumentType::Receipt => vec![purchase(detection, piece, date)],
        DocumentType::Statement => vec![bank(detection, piece, date)],
        DocumentType::Unknown => vec![purchase(detection, piece, date)],
    };

    suggestions.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "built {} suggestion(s) for {:?} document",
        suggestions.len(),
        detection.doc_type
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn invoice_detection() -> Detection {
        Detection {
            doc_type: DocumentType::Invoice,
            date: Some("15/01/2024".to_string()),
            counterparty: Some("ACME SARL".to_string()),
            piece: Some("TOTAL HT".to_string()),
            net: Some(dec("100.00")),
            tax: Some(dec("20.00")),
            gross: Some(dec("120.00")),
            purchase_hints: 1,
            sale_hints: 0,
        }
    }

    #[test]
    fn derives_net_from_gross_and_tax() {
        assert_eq!(
            reconcile(Decimal::ZERO, dec("20.00"), dec("120.00")),
            (dec("100.00"), dec("20.00"), dec("120.00"))
        );
    }

    #[test]
    fn derives_tax_from_gross_and_net() {
        assert_eq!(
            reconcile(dec("100.00"), Decimal::ZERO, dec("120.00")),
            (dec("100.00"), dec("20.00"), dec("120.00"))
        );
    }

    #[test]
    fn derives_gross_from_net_and_tax() {
        assert_eq!(
            reconcile(dec("100.00"), dec("20.00"), Decimal::ZERO),
            (dec("100.00"), dec("20.00"), dec("120.00"))
        );
    }

    #[test]
    fn single_field_keeps_two_zeros() {
        assert_eq!(
            reconcile(dec("100.00"), Decimal::ZERO, Decimal::ZERO),
            (dec("100.00"), Decimal::ZERO, dec("100.00"))
        );
        assert_eq!(
            reconcile(Decimal::ZERO, dec("20.00"), Decimal::ZERO),
            (Decimal::ZERO, dec("20.00"), dec("20.00"))
        );
        assert_eq!(
            reconcile(Decimal::ZERO, Decimal::ZERO, dec("120.00")),
            (Decimal::ZERO, Decimal::ZERO, dec("120.00"))
        );
    }

    #[test]
    fn nothing_in_nothing_out() {
        assert_eq!(
            reconcile(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        );
    }

    #[test]
    fn invoice_emits_both_variants_ranked() {
        let suggestions = build_suggestions(&invoice_detection(), "TOTAL HT", "15/01/2024");
        assert_eq!(suggestions.len(), 2);

        // The purchase hint ranks the purchase variant first.
        let ach = &suggestions[0];
        assert_eq!(ach.journal, JournalCode::Ach);
        assert_eq!(ach.confidence, 0.99);
        assert_eq!(ach.total_debit(), dec("120.00"));
        assert_eq!(ach.total_credit(), dec("120.00"));
        assert_eq!(ach.lines[2].label, "ACME SARL");

        let ven = &suggestions[1];
        assert_eq!(ven.journal, JournalCode::Ven);
        assert_eq!(ven.confidence, 0.9);
        assert!(ven.is_balanced());
        assert_eq!(ven.lines[0].label, "ACME SARL");
    }

    #[test]
    fn tied_confidences_keep_emission_order() {
        let mut detection = invoice_detection();
        detection.purchase_hints = 0;
        let suggestions = build_suggestions(&detection, "P", "2024-01-01");
        assert_eq!(suggestions[0].journal, JournalCode::Ach);
        assert_eq!(suggestions[1].journal, JournalCode::Ven);
        assert_eq!(suggestions[0].confidence, suggestions[1].confidence);
    }

    #[test]
    fn statement_becomes_bank_movement() {
        let detection = Detection {
            doc_type: DocumentType::Statement,
            gross: Some(dec("500.00")),
            piece: Some("TTC".to_string()),
            ..Detection::default()
        };
        let suggestions = build_suggestions(&detection, "TTC", "2024-02-01");
        assert_eq!(suggestions.len(), 1);

        let bnk = &suggestions[0];
        assert_eq!(bnk.journal, JournalCode::Bnk);
        assert_eq!(bnk.confidence, 0.4);
        assert_eq!(bnk.lines.len(), 2);
        assert_eq!(bnk.lines[0].account, "512");
        assert_eq!(bnk.lines[0].debit, dec("500.00"));
        assert_eq!(bnk.lines[1].account, "471");
        assert_eq!(bnk.lines[1].credit, dec("500.00"));
        assert!(bnk.is_balanced());
    }

    #[test]
    fn bank_amount_falls_back_to_net_then_tax() {
        let mut detection = Detection {
            doc_type: DocumentType::Statement,
            net: Some(dec("80.00")),
            ..Detection::default()
        };
        let suggestions = build_suggestions(&detection, "P", "2024-02-01");
        assert_eq!(suggestions[0].lines[0].debit, dec("80.00"));

        detection.net = None;
        detection.tax = Some(dec("5.00"));
        let suggestions = build_suggestions(&detection, "P", "2024-02-01");
        assert_eq!(suggestions[0].lines[0].debit, dec("5.00"));
    }

    #[test]
    fn receipt_defaults_to_purchase_with_default_supplier() {
        let detection = Detection {
            doc_type: DocumentType::Receipt,
            gross: Some(dec("12.50")),
            piece: Some("AUTO".to_string()),
            ..Detection::default()
        };
        let suggestions = build_suggestions(&detection, "AUTO", "2024-03-01");
        assert_eq!(suggestions.len(), 1);

        let ach = &suggestions[0];
        assert_eq!(ach.journal, JournalCode::Ach);
        assert_eq!(ach.confidence, 0.6);
        // Gross-only document: the accepted approximation keeps the two
        // debit lines at zero.
        assert_eq!(ach.lines[0].account, "607");
        assert_eq!(ach.lines[0].debit, Decimal::ZERO);
        assert_eq!(ach.lines[1].account, "44566");
        assert_eq!(ach.lines[1].debit, Decimal::ZERO);
        assert_eq!(ach.lines[2].account, "401");
        assert_eq!(ach.lines[2].label, "Fournisseur");
        assert_eq!(ach.lines[2].credit, dec("12.50"));
    }

    #[test]
    fn empty_detection_yields_zeroed_balanced_purchase() {
        let suggestions = build_suggestions(&Detection::default(), "GEN-1", "2024-03-01");
        assert_eq!(suggestions.len(), 1);

        let ach = &suggestions[0];
        assert_eq!(ach.journal, JournalCode::Ach);
        assert_eq!(ach.piece, "GEN-1");
        assert_eq!(ach.date, "2024-03-01");
        assert_eq!(ach.confidence, 0.5);
        assert!(ach.lines.iter().all(|l| l.debit.is_zero() && l.credit.is_zero()));
        assert!(ach.is_balanced());
    }

    #[test]
    fn every_emitted_account_is_in_the_chart() {
        for doc_type in [
            DocumentType::Invoice,
            DocumentType::Receipt,
            DocumentType::Statement,
            DocumentType::Unknown,
        ] {
            let detection = Detection {
                doc_type,
                ..invoice_detection()
            };
            for suggestion in build_suggestions(&detection, "P", "2024-01-01") {
                for line in &suggestion.lines {
                    assert!(
                        accounts::label(&line.account).is_some(),
                        "account {} missing from the chart",
                        line.account
                    );
                }
            }
        }
    }

    #[test]
    fn confidence_never_reaches_certainty() {
        let detection = Detection {
            doc_type: DocumentType::Invoice,
            net: Some(dec("1.00")),
            tax: Some(dec("1.00")),
            gross: Some(dec("2.00")),
            purchase_hints: 1,
            sale_hints: 1,
            ..Detection::default()
        };
        for suggestion in build_suggestions(&detection, "P", "2024-01-01") {
            assert!(suggestion.confidence <= 0.99);
            assert!(suggestion.confidence >= 0.0);
        }
    }
}
