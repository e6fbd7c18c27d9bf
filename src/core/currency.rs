use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a quote can be denominated in, with their display precision.
///
/// Display-only: the engine never converts between currencies. Amounts stay
/// raw `f64` values internally; rounding happens here, at formatting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro (2 decimal places)
    EUR,
    /// US Dollar (2 decimal places)
    USD,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// West African CFA Franc (no decimal places)
    XOF,
}

impl Currency {
    /// Returns the decimal scale used when displaying amounts
    pub fn scale(&self) -> usize {
        match self {
            Currency::EUR | Currency::USD | Currency::GBP => 2,
            Currency::XOF => 0,
        }
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{:.width$} {}", amount, self, width = self.scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::EUR => write!(f, "EUR"),
            Currency::USD => write!(f, "USD"),
            Currency::GBP => write!(f, "GBP"),
            Currency::XOF => write!(f, "XOF"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "USD" => Ok(Currency::USD),
            "GBP" => Ok(Currency::GBP),
            "XOF" => Ok(Currency::XOF),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
