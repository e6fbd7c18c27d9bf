pub mod negotiation;
pub mod rate_provider;

pub use negotiation::{compute_final_price, to_line_item, NegotiationSession, NegotiationState};
pub use rate_provider::{RateCandidateCatalog, RateProvider, StaticRateProvider};
