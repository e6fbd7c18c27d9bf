use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::currency::Currency;

/// Speed/cost tier a carrier offers a lane at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Express,
    Standard,
    Economy,
}

impl ServiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevel::Express => "express",
            ServiceLevel::Standard => "standard",
            ServiceLevel::Economy => "economy",
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "express" => Ok(ServiceLevel::Express),
            "standard" => Ok(ServiceLevel::Standard),
            "economy" => Ok(ServiceLevel::Economy),
            other => Err(format!("unknown service level: {other}")),
        }
    }
}

/// A carrier rate offer for a lane, as returned by a rate provider.
///
/// Candidates are a read-only market snapshot: negotiation happens on a
/// session that references one, never by mutating the candidate itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCandidate {
    /// Provider-scoped identifier of the offer
    pub id: String,

    /// Carrier or co-loader publishing the rate
    pub supplier_name: String,

    /// Buy price for the lane, before margin and fees
    pub base_price: f64,

    /// Human-readable door-to-door estimate, e.g. "25-30 jours"
    pub transit_time: String,

    /// Last day the offer can be booked at this price
    pub valid_until: NaiveDate,

    pub service_level: ServiceLevel,

    pub currency: Currency,
}

impl RateCandidate {
    /// Whether the offer can no longer be booked on `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.valid_until
    }
}
