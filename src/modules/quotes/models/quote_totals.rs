use serde::{Deserialize, Serialize};

/// Aggregate amounts derived from a quote's line items.
///
/// Always recomputed from the items on demand; nothing here is stored, so
/// the figures can never drift from the rows they summarize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Sum of all row totals, discounts already applied
    pub subtotal: f64,

    /// Sum of per-row tax, each computed on the discounted row total
    pub tax_amount: f64,

    /// `subtotal + tax_amount`
    pub grand_total: f64,
}

impl QuoteTotals {
    /// Totals of an empty quote
    pub const ZERO: QuoteTotals = QuoteTotals {
        subtotal: 0.0,
        tax_amount: 0.0,
        grand_total: 0.0,
    };
}
