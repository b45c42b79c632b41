//! End-to-end extraction scenarios.
//!
//! These tests drive the whole pipeline through `Engine::extract` and check
//! the serialized result the HTTP layer would return.

use ordex_core::{Engine, EngineConfig, ExtractError, ExtractionResult, QuantityValue, ScorerKind};
use serde_json::json;

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn extract(products: &[&str], text: &str) -> ExtractionResult {
    Engine::with_defaults()
        .expect("default engine should build")
        .extract(products, text)
        .expect("well-formed input should extract")
}

#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
fn to_json(result: &ExtractionResult) -> serde_json::Value {
    serde_json::to_value(result).expect("result should serialize")
}

#[test]
fn two_products_with_quantities() {
    let result = extract(
        &["iPhone 16", "Samsung Galaxy S25"],
        "Order: iPhone 16 100 units, Samsung Galaxy S25 50 units",
    );
    assert_eq!(
        to_json(&result),
        json!({"iPhone 16": "100 units", "Samsung Galaxy S25": "50 units", "flag": 0})
    );
}

#[test]
fn repeated_product_is_flagged_as_duplicate() {
    let result = extract(&["iPhone 16"], "iPhone 16 100 units, iPhone 16 50 units");
    assert_eq!(result.flag(), 1);
    let reason = result.reason().unwrap_or_default();
    assert!(reason.starts_with("duplicate found:"), "{reason}");
    assert!(reason.contains("iPhone 16"), "{reason}");
    assert_eq!(
        result.get("iPhone 16"),
        Some(&QuantityValue::Quantity("100 units".to_string()))
    );
}

#[test]
fn unrelated_text_matches_nothing() {
    let result = extract(&["Nokia 3310"], "completely unrelated text");
    assert_eq!(
        to_json(&result),
        json!({"Nokia 3310": -1, "flag": 1, "reason": "no products matched in the text"})
    );
}

#[test]
fn product_without_quantity_is_a_mismatch() {
    let result = extract(&["iPhone 16"], "iPhone 16, no quantity given");
    assert_eq!(
        to_json(&result),
        json!({
            "iPhone 16": "unknown quantity",
            "flag": 1,
            "reason": "mismatch between products (1) and quantities (0)"
        })
    );
}

#[test]
fn longer_name_claims_nested_span() {
    let result = extract(&["iPhone 16 Pro", "iPhone 16"], "iPhone 16 Pro 10 units");
    assert_eq!(
        to_json(&result),
        json!({"iPhone 16 Pro": "10 units", "iPhone 16": -1, "flag": 0})
    );
}

#[test]
fn output_keeps_catalog_order() {
    let result = extract(
        &["Samsung Galaxy S25", "iPhone 16"],
        "iPhone 16 1 unit and Samsung Galaxy S25 2 units",
    );
    let json = serde_json::to_string(&result).unwrap_or_default();
    assert_eq!(
        json,
        r#"{"Samsung Galaxy S25":"2 units","iPhone 16":"1 unit","flag":0}"#
    );
}

#[test]
fn tolerates_typos_and_case() {
    let result = extract(
        &["Samsung Galaxy S25"],
        "please send SAMSNG galaxy s25 5 kg asap",
    );
    assert_eq!(to_json(&result), json!({"Samsung Galaxy S25": "5 kg", "flag": 0}));
}

#[test]
fn glued_units_are_quantities() {
    let result = extract(&["Olive Oil", "Sea Salt"], "Olive Oil 500ml; Sea Salt 2kg");
    assert_eq!(
        to_json(&result),
        json!({"Olive Oil": "500ml", "Sea Salt": "2kg", "flag": 0})
    );
}

#[test]
fn repeated_catalog_names_collapse() {
    let result = extract(&["iPhone 16", "iPhone 16"], "iPhone 16 3 units");
    assert_eq!(to_json(&result), json!({"iPhone 16": "3 units", "flag": 0}));
    assert_eq!(result.entries().len(), 1);
}

#[test]
fn extra_quantity_is_a_mismatch() {
    let result = extract(&["Cable"], "Cable 3 m and also 2 pack of something");
    assert_eq!(result.get("Cable"), Some(&QuantityValue::Quantity("3 m".to_string())));
    assert_eq!(
        result.reason(),
        Some("mismatch between products (1) and quantities (2)")
    );
}

#[test]
fn single_scan_mode_does_not_report_duplicates() {
    let engine = Engine::new(EngineConfig {
        repeated_scan: false,
        ..EngineConfig::default()
    })
    .unwrap_or_else(|e| panic!("{e}"));
    let result = engine
        .extract(&["iPhone 16"], "iPhone 16 100 units, iPhone 16 50 units")
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        result.reason(),
        Some("mismatch between products (1) and quantities (2)")
    );
}

#[test]
fn jaro_winkler_scorer_handles_scenarios() {
    let engine = Engine::new(EngineConfig {
        scorer: ScorerKind::JaroWinkler,
        ..EngineConfig::default()
    })
    .unwrap_or_else(|e| panic!("{e}"));
    let result = engine
        .extract(
            &["iPhone 16", "Samsung Galaxy S25"],
            "Order: iPhone 16 100 units, Samsung Galaxy S25 50 units",
        )
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(result.get("iPhone 16"), Some(&QuantityValue::Quantity("100 units".to_string())));
    assert_eq!(
        result.get("Samsung Galaxy S25"),
        Some(&QuantityValue::Quantity("50 units".to_string()))
    );
}

#[test]
fn malformed_catalog_is_an_error() {
    let engine = Engine::with_defaults().unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(
        engine.extract(&["reason"], "reason 1 unit").err(),
        Some(ExtractError::ReservedProductName("reason".to_string()))
    );
    assert_eq!(
        engine.extract::<&str>(&[], "anything").err(),
        Some(ExtractError::EmptyCatalog)
    );
    assert!(matches!(
        engine.extract(&["  "], "anything"),
        Err(ExtractError::MalformedProduct { position: 0, .. })
    ));
}
