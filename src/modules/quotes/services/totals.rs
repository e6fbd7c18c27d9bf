use crate::modules::quotes::models::{LineItem, QuoteTotals};

/// Derive a quote's aggregate amounts from its line items.
///
/// Stateless and called on every read, so the figures always reflect the
/// current rows. Tax is computed per row on the discounted row total, then
/// summed. All arithmetic is plain f64 with a fixed evaluation order, so
/// the same rows always produce bit-identical results. No rounding happens
/// here; display rounding is the presentation layer's concern.
pub fn compute_totals(items: &[LineItem]) -> QuoteTotals {
    let subtotal: f64 = items.iter().map(|item| item.total).sum();
    let tax_amount: f64 = items
        .iter()
        .map(|item| item.total * item.tax_percent / 100.0)
        .sum();

    QuoteTotals {
        subtotal,
        tax_amount,
        grand_total: subtotal + tax_amount,
    }
}
