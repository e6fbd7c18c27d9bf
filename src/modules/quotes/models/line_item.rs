// A line item is one billable row of a quote: description, quantity, unit
// price, discount, tax, and the derived row total. Rows come from manual
// entry, from a suggestion template, or from a committed rate negotiation;
// whatever the origin, the same total formula holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::suggestions::models::SuggestionTemplate;

/// Default tax rate (percent) stamped on every newly created row.
///
/// A flat, jurisdiction-blind VAT-like rate; a business rule, not a
/// computed value. Callers change a row's tax through the normal update
/// path afterwards.
pub const DEFAULT_TAX_PERCENT: f64 = 20.0;

/// Opaque unique identifier for a line item, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row total formula shared by every creation and update path:
/// `quantity * unit_price * (1 - discount_percent / 100)`.
pub fn line_total(quantity: f64, unit_price: f64, discount_percent: f64) -> f64 {
    quantity * unit_price * (1.0 - discount_percent / 100.0)
}

/// Clamps an amount (quantity, unit price) to a finite non-negative value.
/// NaN and infinities become 0 so they can never reach a row total.
pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.max(0.0)
}

/// Clamps a percentage to the [0, 100] domain; non-finite values become 0.
pub(crate) fn sanitize_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Represents a single billable row of a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier, immutable after creation
    pub id: LineItemId,

    /// Description of the service or charge (may be empty while editing)
    pub description: String,

    /// Count or measured unit count, non-negative
    pub quantity: f64,

    /// Price per unit in the quote currency, non-negative
    pub unit_price: f64,

    /// Commercial discount, clamped to [0, 100]
    pub discount_percent: f64,

    /// Tax rate applied to the discounted row total, clamped to [0, 100]
    pub tax_percent: f64,

    /// Derived row total; never set directly, recomputed on every change
    /// to quantity, unit price, or discount
    pub total: f64,

    /// Carrier/supplier this row's cost is sourced from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,

    /// Cost basis recorded by a rate negotiation conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,

    /// Margin percentage recorded by a rate negotiation conversion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
}

impl LineItem {
    /// Create a manual row: quantity 1, no discount, default tax.
    ///
    /// An empty-row add is `LineItem::new("", 0.0)`; the UI enforces a
    /// non-empty description at save time, not here.
    pub fn new(description: impl Into<String>, unit_price: f64) -> Self {
        let mut item = Self {
            id: LineItemId::generate(),
            description: description.into(),
            quantity: 1.0,
            unit_price: sanitize_amount(unit_price),
            discount_percent: 0.0,
            tax_percent: DEFAULT_TAX_PERCENT,
            total: 0.0,
            supplier: None,
            base_price: None,
            margin: None,
        };
        item.recompute_total();
        item
    }

    /// Create a row from a one-click suggestion template
    pub fn from_template(template: &SuggestionTemplate) -> Self {
        Self::new(template.description.clone(), template.unit_price)
    }

    /// Create a row from a committed rate negotiation, keeping the cost
    /// basis and margin for later display
    pub fn negotiated(
        description: impl Into<String>,
        unit_price: f64,
        supplier: impl Into<String>,
        base_price: f64,
        margin_percent: f64,
    ) -> Self {
        let mut item = Self::new(description, unit_price);
        item.supplier = Some(supplier.into());
        item.base_price = Some(base_price);
        item.margin = Some(margin_percent);
        item
    }

    /// Recompute `total` from the current quantity, unit price and discount
    pub fn recompute_total(&mut self) {
        self.total = line_total(self.quantity, self.unit_price, self.discount_percent);
    }

    /// Clamp all numeric fields to their domains and recompute the total.
    /// Returns true when any field had to be adjusted.
    pub(crate) fn sanitize_fields(&mut self) -> bool {
        let quantity = sanitize_amount(self.quantity);
        let unit_price = sanitize_amount(self.unit_price);
        let discount = sanitize_percent(self.discount_percent);
        let tax = sanitize_percent(self.tax_percent);

        let adjusted = quantity != self.quantity
            || unit_price != self.unit_price
            || discount != self.discount_percent
            || tax != self.tax_percent;

        self.quantity = quantity;
        self.unit_price = unit_price;
        self.discount_percent = discount;
        self.tax_percent = tax;
        self.recompute_total();
        adjusted
    }
}

/// One field-level update to a line item.
///
/// The variant set is closed: an unknown field, or an attempt to set the
/// derived `total`, is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LineItemUpdate {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
    DiscountPercent(f64),
    TaxPercent(f64),
}

impl LineItemUpdate {
    /// Apply the update, clamping the incoming value to its domain.
    /// Quantity, unit price and discount recompute the row total; tax and
    /// description leave it untouched. Returns true when the value was
    /// clamped.
    pub(crate) fn apply_to(self, item: &mut LineItem) -> bool {
        match self {
            LineItemUpdate::Description(description) => {
                item.description = description;
                false
            }
            LineItemUpdate::Quantity(value) => {
                let clean = sanitize_amount(value);
                let clamped = clean != value;
                item.quantity = clean;
                item.recompute_total();
                clamped
            }
            LineItemUpdate::UnitPrice(value) => {
                let clean = sanitize_amount(value);
                let clamped = clean != value;
                item.unit_price = clean;
                item.recompute_total();
                clamped
            }
            LineItemUpdate::DiscountPercent(value) => {
                let clean = sanitize_percent(value);
                let clamped = clean != value;
                item.discount_percent = clean;
                item.recompute_total();
                clamped
            }
            LineItemUpdate::TaxPercent(value) => {
                let clean = sanitize_percent(value);
                let clamped = clean != value;
                item.tax_percent = clean;
                clamped
            }
        }
    }
}
