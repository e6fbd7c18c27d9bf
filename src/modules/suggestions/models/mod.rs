pub mod template;

pub use template::SuggestionTemplate;
