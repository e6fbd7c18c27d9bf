use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::info;

use crate::core::error::{AppError, Result};
use crate::core::transport::TransportMode;
use crate::modules::suggestions::models::SuggestionTemplate;

/// Built-in template dataset, embedded at compile time
const BUILTIN_TEMPLATES: &str = include_str!("../data/suggestion_templates.json");

static BUILTIN: OnceLock<SuggestionCatalog> = OnceLock::new();

/// Read-only catalog of suggested line items, grouped by transport mode.
///
/// Loaded once from JSON and validated up front, so lookups can stay
/// infallible: an unknown mode simply yields no suggestions.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    templates: HashMap<TransportMode, Vec<SuggestionTemplate>>,
}

impl SuggestionCatalog {
    /// Parse and validate a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: HashMap<TransportMode, Vec<SuggestionTemplate>> =
            serde_json::from_str(json)?;

        if templates.is_empty() {
            return Err(AppError::configuration(
                "suggestion catalog contains no transport modes",
            ));
        }

        for (mode, entries) in &templates {
            if entries.is_empty() {
                return Err(AppError::configuration(format!(
                    "suggestion catalog has no templates for mode '{mode}'"
                )));
            }
            for template in entries {
                if template.description.trim().is_empty() {
                    return Err(AppError::configuration(format!(
                        "suggestion template for mode '{mode}' has an empty description"
                    )));
                }
                if !template.unit_price.is_finite() || template.unit_price < 0.0 {
                    return Err(AppError::configuration(format!(
                        "suggestion template '{}' has an invalid unit price",
                        template.description
                    )));
                }
            }
        }

        let total: usize = templates.values().map(Vec::len).sum();
        info!(
            modes = templates.len(),
            templates = total,
            "Loaded suggestion catalog"
        );

        Ok(Self { templates })
    }

    /// The built-in catalog shipped with the application
    pub fn builtin() -> Result<&'static SuggestionCatalog> {
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let catalog = Self::from_json_str(BUILTIN_TEMPLATES)?;
        Ok(BUILTIN.get_or_init(|| catalog))
    }

    /// Templates suggested for a transport mode; empty when the catalog
    /// carries none for it
    pub fn templates_for(&self, mode: TransportMode) -> &[SuggestionTemplate] {
        self.templates.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Modes the catalog has suggestions for, in display order
    pub fn modes(&self) -> Vec<TransportMode> {
        TransportMode::ALL
            .into_iter()
            .filter(|mode| self.templates.contains_key(mode))
            .collect()
    }
}
