pub mod currency;
pub mod error;
pub mod transport;

pub use currency::Currency;
pub use error::{AppError, Result};
pub use transport::TransportMode;
