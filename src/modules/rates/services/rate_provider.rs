use std::sync::Arc;

use chrono::{Days, Utc};
use tracing::info;

use crate::core::currency::Currency;
use crate::core::transport::TransportMode;
use crate::modules::rates::models::{RateCandidate, ServiceLevel};

/// Source of carrier rate offers for a lane.
///
/// Implementations may sit on top of carrier APIs, rate files or cached
/// market tables; callers only see the returned snapshot.
pub trait RateProvider: Send + Sync {
    /// Rate offers available for the lane, in the provider's own order
    fn list_candidates(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
    ) -> Vec<RateCandidate>;
}

/// Front door to rate lookups: wraps a provider and hands out snapshots.
///
/// The returned candidates are owned copies; a later fetch never mutates
/// offers a caller is still holding.
pub struct RateCandidateCatalog {
    provider: Arc<dyn RateProvider>,
}

impl RateCandidateCatalog {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the current offers for a lane
    pub fn fetch_candidates(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
    ) -> Vec<RateCandidate> {
        let candidates = self.provider.list_candidates(origin, destination, mode);
        info!(
            origin,
            destination,
            mode = %mode,
            count = candidates.len(),
            "Fetched rate candidates"
        );
        candidates
    }
}

/// Built-in provider backed by an indicative market table.
///
/// Offers are lane-independent reference rates per transport mode, valid
/// for thirty days from the moment they are listed. Real deployments plug
/// a carrier-connected [`RateProvider`] in instead.
#[derive(Debug, Default)]
pub struct StaticRateProvider;

impl StaticRateProvider {
    fn offers(mode: TransportMode) -> &'static [(&'static str, &'static str, f64, &'static str, ServiceLevel)] {
        // (id, supplier, base price, transit time, service level)
        match mode {
            TransportMode::Maritime => &[
                ("cma-cgm-standard", "CMA CGM", 1200.0, "25-30 jours", ServiceLevel::Standard),
                ("maersk-express", "Maersk", 1580.0, "18-22 jours", ServiceLevel::Express),
                ("msc-economy", "MSC", 980.0, "35-40 jours", ServiceLevel::Economy),
            ],
            TransportMode::Aerien => &[
                ("af-cargo-express", "Air France Cargo", 3200.0, "2-3 jours", ServiceLevel::Express),
                ("emirates-standard", "Emirates SkyCargo", 2750.0, "4-5 jours", ServiceLevel::Standard),
            ],
            TransportMode::Routier => &[
                ("dachser-standard", "Dachser", 680.0, "3-4 jours", ServiceLevel::Standard),
                ("schenker-express", "DB Schenker", 890.0, "1-2 jours", ServiceLevel::Express),
                ("geodis-economy", "Geodis", 540.0, "5-7 jours", ServiceLevel::Economy),
            ],
            TransportMode::Ferroviaire => &[
                ("forwardis-standard", "Forwardis", 950.0, "8-10 jours", ServiceLevel::Standard),
                ("railfreight-economy", "Rail Cargo Group", 760.0, "12-15 jours", ServiceLevel::Economy),
            ],
            TransportMode::Multimodal => &[
                ("kn-standard", "Kuehne+Nagel", 1850.0, "15-20 jours", ServiceLevel::Standard),
                ("dsv-economy", "DSV", 1520.0, "20-25 jours", ServiceLevel::Economy),
            ],
        }
    }
}

impl RateProvider for StaticRateProvider {
    fn list_candidates(
        &self,
        _origin: &str,
        _destination: &str,
        mode: TransportMode,
    ) -> Vec<RateCandidate> {
        let today = Utc::now().date_naive();
        let valid_until = today.checked_add_days(Days::new(30)).unwrap_or(today);

        Self::offers(mode)
            .iter()
            .map(|(id, supplier, base_price, transit_time, service_level)| RateCandidate {
                id: (*id).to_string(),
                supplier_name: (*supplier).to_string(),
                base_price: *base_price,
                transit_time: (*transit_time).to_string(),
                valid_until,
                service_level: *service_level,
                currency: Currency::EUR,
            })
            .collect()
    }
}
