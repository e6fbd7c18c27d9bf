// Tests for the suggestion catalog: the built-in dataset must be complete
// and valid, lookups must stay read-only, and every template must yield a
// well-formed line item when added to a store.

use proptest::prelude::*;

use fretdesk::{
    AppError, LineItemStore, SuggestionCatalog, TransportMode, DEFAULT_TAX_PERCENT,
};

proptest! {
    #[test]
    fn test_every_template_yields_a_well_formed_row(
        mode_idx in 0usize..TransportMode::ALL.len()
    ) {
        let catalog = SuggestionCatalog::builtin().unwrap();
        let mode = TransportMode::ALL[mode_idx];

        for template in catalog.templates_for(mode) {
            let mut store = LineItemStore::new();
            store.add_item(Some(template));

            let item = &store.items()[0];
            prop_assert_eq!(item.description.as_str(), template.description.as_str());
            prop_assert_eq!(item.unit_price, template.unit_price);
            prop_assert_eq!(item.quantity, 1.0);
            prop_assert_eq!(item.discount_percent, 0.0);
            prop_assert_eq!(item.tax_percent, DEFAULT_TAX_PERCENT);
            prop_assert_eq!(item.total, template.unit_price);
        }
    }
}

#[test]
fn test_builtin_catalog_covers_every_transport_mode() {
    let catalog = SuggestionCatalog::builtin().unwrap();
    for mode in TransportMode::ALL {
        assert!(
            !catalog.templates_for(mode).is_empty(),
            "no suggestions for {mode}"
        );
    }
    assert_eq!(catalog.modes(), TransportMode::ALL.to_vec());
}

#[test]
fn test_builtin_templates_carry_valid_prices() {
    let catalog = SuggestionCatalog::builtin().unwrap();
    for mode in TransportMode::ALL {
        for template in catalog.templates_for(mode) {
            assert!(template.unit_price.is_finite());
            assert!(template.unit_price >= 0.0);
            assert!(!template.description.trim().is_empty());
        }
    }
}

#[test]
fn test_lookup_order_is_stable() {
    let catalog = SuggestionCatalog::builtin().unwrap();
    let first: Vec<_> = catalog
        .templates_for(TransportMode::Maritime)
        .iter()
        .map(|t| t.description.clone())
        .collect();
    let second: Vec<_> = catalog
        .templates_for(TransportMode::Maritime)
        .iter()
        .map(|t| t.description.clone())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_catalog_without_modes_is_rejected() {
    let err = SuggestionCatalog::from_json_str("{}").unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_mode_with_no_templates_is_rejected() {
    let err = SuggestionCatalog::from_json_str(r#"{"Routier":[]}"#).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_malformed_json_is_reported_as_json_error() {
    let err = SuggestionCatalog::from_json_str("[not json").unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_custom_catalog_restricts_available_modes() {
    let catalog = SuggestionCatalog::from_json_str(
        r#"{
            "Maritime": [{"description": "Fret maritime conteneur 20 pieds", "unitPrice": 1200.0}],
            "Routier": [{"description": "Transport routier national", "unitPrice": 680.0}]
        }"#,
    )
    .unwrap();

    assert_eq!(
        catalog.modes(),
        vec![TransportMode::Maritime, TransportMode::Routier]
    );
    assert!(catalog.templates_for(TransportMode::Aerien).is_empty());
    assert_eq!(catalog.templates_for(TransportMode::Maritime)[0].unit_price, 1200.0);
}
