use tracing::info;

use crate::core::currency::Currency;
use crate::core::error::Result;
use crate::core::transport::TransportMode;
use crate::modules::quotes::models::{LineItem, LineItemId, LineItemUpdate, QuoteTotals};
use crate::modules::quotes::services::line_item_store::LineItemStore;
use crate::modules::quotes::services::totals::compute_totals;
use crate::modules::rates::models::RateCandidate;
use crate::modules::rates::services::negotiation::{NegotiationSession, NegotiationState};
use crate::modules::suggestions::models::SuggestionTemplate;

/// Editing session for one quote: the line item store, the rate
/// negotiation in progress, and the quote's display currency.
///
/// This is the surface the presentation layer talks to. Aggregates are
/// recomputed from the live rows on every read, never cached. The currency
/// is carried for display formatting only; no conversion happens here.
pub struct QuoteEditor {
    store: LineItemStore,
    negotiation: NegotiationSession,
    currency: Currency,
}

impl QuoteEditor {
    pub fn new(currency: Currency) -> Self {
        Self {
            store: LineItemStore::new(),
            negotiation: NegotiationSession::new(),
            currency,
        }
    }

    // Reads

    pub fn items(&self) -> &[LineItem] {
        self.store.items()
    }

    pub fn item(&self, id: LineItemId) -> Option<&LineItem> {
        self.store.get(id)
    }

    /// Subtotal, tax amount and grand total of the current rows
    pub fn totals(&self) -> QuoteTotals {
        compute_totals(self.store.items())
    }

    pub fn negotiation_state(&self) -> &NegotiationState {
        self.negotiation.state()
    }

    /// Preview of the sell price the pending negotiation would commit at
    pub fn negotiated_price(&self) -> Option<f64> {
        self.negotiation.final_price()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Grand total formatted in the quote currency, for display
    pub fn formatted_grand_total(&self) -> String {
        self.currency.format_amount(self.totals().grand_total)
    }

    // Writes

    pub fn add_item(&mut self, template: Option<&SuggestionTemplate>) {
        self.store.add_item(template);
    }

    pub fn remove_item(&mut self, id: LineItemId) {
        self.store.remove_item(id);
    }

    pub fn update_item(&mut self, id: LineItemId, update: LineItemUpdate) {
        self.store.update_item(id, update);
    }

    pub fn select_candidate(&mut self, candidate: RateCandidate) {
        self.negotiation.select_candidate(candidate);
    }

    pub fn set_margin(&mut self, margin_percent: f64) {
        self.negotiation.set_margin(margin_percent);
    }

    pub fn set_additional_fees(&mut self, fees: f64) {
        self.negotiation.set_additional_fees(fees);
    }

    /// Turn the pending negotiation into a line item. Fails when no rate
    /// candidate is selected; on success the new row lands at the end of
    /// the quote and the negotiation resets.
    pub fn commit_negotiation(&mut self, mode: TransportMode) -> Result<()> {
        let item = self.negotiation.commit(mode)?;
        self.store.insert(item);
        info!(
            items = self.store.len(),
            grand_total = self.totals().grand_total,
            "Negotiated line item added to quote"
        );
        Ok(())
    }
}

impl Default for QuoteEditor {
    fn default() -> Self {
        Self::new(Currency::EUR)
    }
}
