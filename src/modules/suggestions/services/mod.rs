pub mod catalog;

pub use catalog::SuggestionCatalog;
