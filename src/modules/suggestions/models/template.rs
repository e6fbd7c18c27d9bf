use serde::{Deserialize, Serialize};

/// A pre-filled line item suggestion: a common charge for a transport mode
/// with its usual market price, ready for one-click insertion into a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionTemplate {
    /// Charge description as it should appear on the quote
    pub description: String,

    /// Indicative unit price in the quote currency
    pub unit_price: f64,
}

impl SuggestionTemplate {
    pub fn new(description: impl Into<String>, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            unit_price,
        }
    }
}
