pub mod line_item;
pub mod quote_totals;

pub use line_item::{LineItem, LineItemId, LineItemUpdate, DEFAULT_TAX_PERCENT};
pub use quote_totals::QuoteTotals;
