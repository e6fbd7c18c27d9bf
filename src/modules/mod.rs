pub mod quotes;
pub mod rates;
pub mod suggestions;
