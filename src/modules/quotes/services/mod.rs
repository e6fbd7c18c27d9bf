pub mod line_item_store;
pub mod quote_editor;
pub mod totals;

pub use line_item_store::LineItemStore;
pub use quote_editor::QuoteEditor;
pub use totals::compute_totals;
