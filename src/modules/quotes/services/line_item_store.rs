use tracing::{debug, warn};

use crate::modules::quotes::models::{LineItem, LineItemId, LineItemUpdate};
use crate::modules::suggestions::models::SuggestionTemplate;

/// Owns the ordered line items of one quote and is their only mutator.
///
/// Order is insertion order and removal never renumbers. Unknown ids on
/// update or removal are silent no-ops so the presentation layer can retry
/// idempotently. Every mutation leaves each row's `total` consistent with
/// its quantity, unit price and discount.
#[derive(Debug, Default)]
pub struct LineItemStore {
    items: Vec<LineItem>,
}

impl LineItemStore {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The quote's rows, in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a new row: empty when no template is given, otherwise
    /// pre-filled from the template. Defaults are quantity 1, no discount,
    /// default tax.
    pub fn add_item(&mut self, template: Option<&SuggestionTemplate>) {
        let item = match template {
            Some(template) => LineItem::from_template(template),
            None => LineItem::new("", 0.0),
        };
        self.insert(item);
    }

    /// Append an already-built row; every insertion, manual or negotiated,
    /// goes through here. All numeric fields are clamped to their domains
    /// and the total recomputed before the row is stored.
    pub fn insert(&mut self, mut item: LineItem) {
        if item.sanitize_fields() {
            warn!(item_id = %item.id, "Clamped out-of-domain fields on inserted line item");
        }
        debug!(item_id = %item.id, description = %item.description, "Inserted line item");
        self.items.push(item);
    }

    /// Remove a row; unknown ids are ignored
    pub fn remove_item(&mut self, id: LineItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!(item_id = %id, "Ignoring removal of unknown line item");
        } else {
            debug!(item_id = %id, "Removed line item");
        }
    }

    /// Apply a field-level update to a row; unknown ids are ignored.
    /// Quantity, unit price and discount changes recompute the row total.
    pub fn update_item(&mut self, id: LineItemId, update: LineItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(item_id = %id, "Ignoring update of unknown line item");
            return;
        };
        debug!(item_id = %id, update = ?update, "Updating line item");
        if update.apply_to(item) {
            warn!(item_id = %id, "Clamped out-of-domain value on line item update");
        }
    }
}
