// Property-based tests for the aggregate calculator.
//
// For any sequence of line items:
// - subtotal is the sum of row totals
// - tax is summed per row, computed on the discounted row total
// - grand total is subtotal plus tax
// - results are deterministic, bit for bit

use proptest::prelude::*;

use fretdesk::{compute_totals, LineItem, LineItemId, LineItemStore, QuoteTotals, SuggestionTemplate};

// One drawn row: quantity, unit price in cents, discount %, tax %
type RowSpec = (u32, u64, u8, u8);

fn build_items(rows: &[RowSpec]) -> Vec<LineItem> {
    rows.iter()
        .map(|&(quantity, price_cents, discount, tax)| {
            let mut item = LineItem::new("Prestation", price_cents as f64 / 100.0);
            item.quantity = quantity as f64;
            item.discount_percent = discount as f64;
            item.tax_percent = tax as f64;
            item.recompute_total();
            item
        })
        .collect()
}

fn row_strategy() -> impl Strategy<Value = RowSpec> {
    (0u32..100u32, 0u64..10_000_000u64, 0u8..=100u8, 0u8..=100u8)
}

proptest! {
    #[test]
    fn test_subtotal_is_sum_of_row_totals(
        rows in prop::collection::vec(row_strategy(), 0..8)
    ) {
        let items = build_items(&rows);
        let totals = compute_totals(&items);

        let expected: f64 = items.iter().map(|item| item.total).sum();
        prop_assert_eq!(totals.subtotal.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_tax_sums_per_row_on_discounted_totals(
        rows in prop::collection::vec(row_strategy(), 0..8)
    ) {
        let items = build_items(&rows);
        let totals = compute_totals(&items);

        let expected: f64 = items
            .iter()
            .map(|item| item.total * item.tax_percent / 100.0)
            .sum();
        prop_assert_eq!(totals.tax_amount.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax(
        rows in prop::collection::vec(row_strategy(), 0..8)
    ) {
        let totals = compute_totals(&build_items(&rows));
        prop_assert_eq!(
            totals.grand_total.to_bits(),
            (totals.subtotal + totals.tax_amount).to_bits()
        );
    }

    #[test]
    fn test_aggregates_are_non_negative_for_valid_rows(
        rows in prop::collection::vec(row_strategy(), 0..8)
    ) {
        let totals = compute_totals(&build_items(&rows));
        prop_assert!(totals.subtotal >= 0.0);
        prop_assert!(totals.tax_amount >= 0.0);
        prop_assert!(totals.grand_total >= totals.subtotal);
    }

    #[test]
    fn test_repeated_computation_is_bit_identical(
        rows in prop::collection::vec(row_strategy(), 0..8)
    ) {
        let items = build_items(&rows);
        let first = compute_totals(&items);
        let second = compute_totals(&items);
        prop_assert_eq!(first.subtotal.to_bits(), second.subtotal.to_bits());
        prop_assert_eq!(first.tax_amount.to_bits(), second.tax_amount.to_bits());
        prop_assert_eq!(first.grand_total.to_bits(), second.grand_total.to_bits());
    }

    #[test]
    fn test_removing_unknown_id_leaves_totals_unchanged(
        rows in prop::collection::vec(row_strategy(), 1..6)
    ) {
        let mut store = LineItemStore::new();
        for &(_, price_cents, _, _) in &rows {
            store.add_item(Some(&SuggestionTemplate::new("Fret", price_cents as f64 / 100.0)));
        }
        let before = compute_totals(store.items());

        store.remove_item(LineItemId::generate());

        let after = compute_totals(store.items());
        prop_assert_eq!(before.subtotal.to_bits(), after.subtotal.to_bits());
        prop_assert_eq!(before.grand_total.to_bits(), after.grand_total.to_bits());
    }
}

#[test]
fn test_empty_sequence_totals_are_zero() {
    let totals = compute_totals(&[]);
    assert_eq!(totals, QuoteTotals::ZERO);
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.tax_amount, 0.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn test_known_quote_breakdown() {
    // 2 x 1200 and 1 x 350 without discount, 1 x 680 with 5% discount,
    // all at 20% tax
    let items = build_items(&[(2, 120_000, 0, 20), (1, 35_000, 0, 20), (1, 68_000, 5, 20)]);

    assert_eq!(items[0].total, 2400.0);
    assert_eq!(items[1].total, 350.0);
    assert_eq!(items[2].total, 646.0);

    let totals = compute_totals(&items);
    assert_eq!(totals.subtotal, 3396.0);
    assert!((totals.tax_amount - 679.2).abs() < 1e-9);
    assert!((totals.grand_total - 4075.2).abs() < 1e-9);
}

#[test]
fn test_tax_ignores_pre_discount_price() {
    // 50% discount halves both the row total and its tax
    let items = build_items(&[(1, 100_000, 50, 20)]);
    let totals = compute_totals(&items);
    assert_eq!(totals.subtotal, 500.0);
    assert_eq!(totals.tax_amount, 100.0);
    assert_eq!(totals.grand_total, 600.0);
}
