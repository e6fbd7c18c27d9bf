pub mod rate_candidate;

pub use rate_candidate::{RateCandidate, ServiceLevel};
