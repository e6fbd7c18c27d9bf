//! Quote line-item pricing engine for freight forwarding.
//!
//! Turns quantities, unit prices, discounts, taxes and negotiated carrier
//! rates into the amounts a client is billed: per-row totals, subtotal,
//! tax amount and grand total. The engine is an in-process computation
//! module; rendering, persistence and rate lookup backends live outside.

pub mod core;
pub mod modules;

pub use crate::core::currency::Currency;
pub use crate::core::error::{AppError, Result};
pub use crate::core::transport::TransportMode;

pub use crate::modules::quotes::models::{
    LineItem, LineItemId, LineItemUpdate, QuoteTotals, DEFAULT_TAX_PERCENT,
};
pub use crate::modules::quotes::services::{compute_totals, LineItemStore, QuoteEditor};
pub use crate::modules::rates::models::{RateCandidate, ServiceLevel};
pub use crate::modules::rates::services::{
    compute_final_price, to_line_item, NegotiationSession, NegotiationState,
    RateCandidateCatalog, RateProvider, StaticRateProvider,
};
pub use crate::modules::suggestions::models::SuggestionTemplate;
pub use crate::modules::suggestions::services::SuggestionCatalog;
