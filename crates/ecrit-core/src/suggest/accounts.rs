//! Chart-of-accounts constants used by the suggestion builder.
//!
//! The codes are engine constants; a deployment resolves them against its
//! own chart of accounts keyed by these same codes.

/// An account referenced by the suggestion builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Account code.
    pub code: &'static str,
    /// Default posting label.
    pub label: &'static str,
}

/// Purchases of goods and services.
pub const PURCHASES: Account = Account {
    code: "607",
    label: "Achats",
};

/// Deductible VAT on purchases.
pub const VAT_DEDUCTIBLE: Account = Account {
    code: "44566",
    label: "TVA déductible",
};

/// Supplier payables.
pub const SUPPLIERS: Account = Account {
    code: "401",
    label: "Fournisseur",
};

/// Customer receivables.
pub const CUSTOMERS: Account = Account {
    code: "411",
    label: "Client",
};

/// Sales of goods and services.
pub const SALES: Account = Account {
    code: "707",
    label: "Ventes",
};

/// Collected VAT on sales.
pub const VAT_COLLECTED: Account = Account {
    code: "44571",
    label: "TVA collectée",
};

/// Bank account.
pub const BANK: Account = Account {
    code: "512",
    label: "Banque",
};

/// Suspense account for movements awaiting assignment.
pub const SUSPENSE: Account = Account {
    code: "471",
    label: "A régulariser",
};

/// Every account the suggestion builder can reference.
pub const CHART: [Account; 8] = [
    PURCHASES,
    VAT_DEDUCTIBLE,
    SUPPLIERS,
    CUSTOMERS,
    SALES,
    VAT_COLLECTED,
    BANK,
    SUSPENSE,
];

/// Default posting label for a code, if the chart knows it.
pub fn label(code: &str) -> Option<&'static str> {
    CHART
        .iter()
        .find(|account| account.code == code)
        .map(|account| account.label)
}
