// Rate negotiation session: pick a carrier offer, lay a margin and fixed
// fees on top, and commit the result as a quote line item. One session per
// negotiation; committing hands back the item and returns the session to
// its idle state.

use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::core::transport::TransportMode;
use crate::modules::quotes::models::LineItem;
use crate::modules::rates::models::RateCandidate;

/// Sell price derived from a carrier offer:
/// `base_price * (1 + margin_percent / 100) + additional_fees`.
///
/// The margin is applied literally; values outside the usual [0, 50] band
/// are computed as given.
pub fn compute_final_price(base_price: f64, margin_percent: f64, additional_fees: f64) -> f64 {
    base_price * (1.0 + margin_percent / 100.0) + additional_fees
}

/// Convert a carrier offer plus customization into a quote row.
///
/// The row carries the supplier, cost basis and margin for audit, and its
/// total obeys the same formula as a manually entered item.
pub fn to_line_item(
    candidate: &RateCandidate,
    margin_percent: f64,
    additional_fees: f64,
    mode: TransportMode,
) -> LineItem {
    let unit_price = compute_final_price(candidate.base_price, margin_percent, additional_fees);
    let description = format!(
        "{} - {} ({})",
        mode, candidate.supplier_name, candidate.service_level
    );
    LineItem::negotiated(
        description,
        unit_price,
        candidate.supplier_name.clone(),
        candidate.base_price,
        margin_percent,
    )
}

/// Where a negotiation session currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum NegotiationState {
    /// Idle; nothing to price yet
    NoCandidateSelected,

    /// An offer is selected, margin and fees still at their defaults
    CandidateSelected { candidate: RateCandidate },

    /// The pricing is being adjusted on top of the selected offer
    Customizing {
        candidate: RateCandidate,
        margin_percent: f64,
        additional_fees: f64,
    },
}

/// One quote's rate negotiation, driven by the presentation layer.
///
/// Transitions are closed: selecting an offer discards any customization in
/// progress, margin and fee updates without a selection are ignored, and a
/// commit is only valid with an offer selected.
#[derive(Debug, Clone)]
pub struct NegotiationSession {
    state: NegotiationState,
}

impl NegotiationSession {
    pub fn new() -> Self {
        Self {
            state: NegotiationState::NoCandidateSelected,
        }
    }

    pub fn state(&self) -> &NegotiationState {
        &self.state
    }

    pub fn has_selection(&self) -> bool {
        !matches!(self.state, NegotiationState::NoCandidateSelected)
    }

    pub fn selected_candidate(&self) -> Option<&RateCandidate> {
        match &self.state {
            NegotiationState::NoCandidateSelected => None,
            NegotiationState::CandidateSelected { candidate }
            | NegotiationState::Customizing { candidate, .. } => Some(candidate),
        }
    }

    /// Margin currently applied; 0 until the first margin update
    pub fn margin_percent(&self) -> f64 {
        match &self.state {
            NegotiationState::Customizing { margin_percent, .. } => *margin_percent,
            _ => 0.0,
        }
    }

    /// Fixed fees currently applied; 0 until the first fee update
    pub fn additional_fees(&self) -> f64 {
        match &self.state {
            NegotiationState::Customizing {
                additional_fees, ..
            } => *additional_fees,
            _ => 0.0,
        }
    }

    /// Preview of the sell price the commit would produce, if an offer is
    /// selected
    pub fn final_price(&self) -> Option<f64> {
        self.selected_candidate().map(|candidate| {
            compute_final_price(
                candidate.base_price,
                self.margin_percent(),
                self.additional_fees(),
            )
        })
    }

    /// Select an offer to negotiate on, discarding any customization made
    /// for a previous selection
    pub fn select_candidate(&mut self, candidate: RateCandidate) {
        debug!(
            candidate_id = %candidate.id,
            supplier = %candidate.supplier_name,
            base_price = candidate.base_price,
            "Selected rate candidate"
        );
        self.state = NegotiationState::CandidateSelected { candidate };
    }

    /// Update the margin. Ignored when no offer is selected. Non-finite
    /// input falls back to 0 so it can never reach a price.
    pub fn set_margin(&mut self, margin_percent: f64) {
        let margin = if margin_percent.is_finite() {
            margin_percent
        } else {
            warn!("Non-finite margin replaced with 0");
            0.0
        };

        match &mut self.state {
            NegotiationState::NoCandidateSelected => {
                warn!("Ignoring margin update: no rate candidate selected");
            }
            NegotiationState::CandidateSelected { candidate } => {
                let candidate = candidate.clone();
                self.state = NegotiationState::Customizing {
                    candidate,
                    margin_percent: margin,
                    additional_fees: 0.0,
                };
            }
            NegotiationState::Customizing { margin_percent, .. } => {
                *margin_percent = margin;
            }
        }
    }

    /// Update the fixed fees. Ignored when no offer is selected. Fees are
    /// non-negative; invalid input falls back to 0.
    pub fn set_additional_fees(&mut self, fees: f64) {
        let fees = if fees.is_finite() {
            if fees < 0.0 {
                warn!(fees, "Negative fees replaced with 0");
                0.0
            } else {
                fees
            }
        } else {
            warn!("Non-finite fees replaced with 0");
            0.0
        };

        match &mut self.state {
            NegotiationState::NoCandidateSelected => {
                warn!("Ignoring fee update: no rate candidate selected");
            }
            NegotiationState::CandidateSelected { candidate } => {
                let candidate = candidate.clone();
                self.state = NegotiationState::Customizing {
                    candidate,
                    margin_percent: 0.0,
                    additional_fees: fees,
                };
            }
            NegotiationState::Customizing {
                additional_fees, ..
            } => {
                *additional_fees = fees;
            }
        }
    }

    /// Finalize the negotiation into a line item and return the session to
    /// its idle state. Fails when no offer is selected.
    pub fn commit(&mut self, mode: TransportMode) -> Result<LineItem> {
        let (candidate, margin, fees) = match &self.state {
            NegotiationState::NoCandidateSelected => {
                return Err(AppError::NoCandidateSelected);
            }
            NegotiationState::CandidateSelected { candidate } => (candidate.clone(), 0.0, 0.0),
            NegotiationState::Customizing {
                candidate,
                margin_percent,
                additional_fees,
            } => (candidate.clone(), *margin_percent, *additional_fees),
        };

        let item = to_line_item(&candidate, margin, fees, mode);
        info!(
            supplier = %candidate.supplier_name,
            mode = %mode,
            base_price = candidate.base_price,
            margin_percent = margin,
            additional_fees = fees,
            final_price = item.unit_price,
            "Committed rate negotiation"
        );
        self.state = NegotiationState::NoCandidateSelected;
        Ok(item)
    }
}

impl Default for NegotiationSession {
    fn default() -> Self {
        Self::new()
    }
}
