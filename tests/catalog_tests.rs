//! Model Catalog Tests
//!
//! Tests for:
//! - Catalog JSON parsing (including optional attribution)
//! - Lookup by id and by display name
//! - Acceptance of models referencing unlisted categories
//! - Parse failure surfacing

mod common;

use diorama::{DioramaError, ModelCatalog};

const CATALOG_JSON: &[u8] = br#"{
    "categories": ["chair", "plant"],
    "models": [
        {
            "id": "c1",
            "name": "Cafe Chair",
            "attribution": "CC-BY model by someone",
            "path": "chairs/c1.glb",
            "category": "chair"
        },
        {
            "id": "p1",
            "name": "Fern",
            "path": "plants/fern.glb",
            "category": "plant"
        }
    ]
}"#;

#[test]
fn parses_catalog_document() {
    common::init_logging();
    let catalog = ModelCatalog::from_json(CATALOG_JSON).expect("valid document");

    assert_eq!(catalog.categories, vec!["chair", "plant"]);
    assert_eq!(catalog.models.len(), 2);
    assert_eq!(catalog.models[0].path, "chairs/c1.glb");
}

#[test]
fn attribution_defaults_to_empty() {
    let catalog = ModelCatalog::from_json(CATALOG_JSON).expect("valid document");

    assert_eq!(catalog.models[0].attribution, "CC-BY model by someone");
    assert_eq!(catalog.models[1].attribution, "");
}

#[test]
fn lookup_by_id_and_name() {
    let catalog = ModelCatalog::from_json(CATALOG_JSON).expect("valid document");

    assert_eq!(
        catalog.model_by_id("p1").map(|m| m.name.as_str()),
        Some("Fern")
    );
    assert_eq!(
        catalog.model_by_name("Cafe Chair").map(|m| m.id.as_str()),
        Some("c1")
    );

    assert!(catalog.model_by_id("nope").is_none());
    assert!(catalog.model_by_name("cafe chair").is_none(), "names are exact");
}

#[test]
fn unlisted_category_is_accepted() {
    common::init_logging();
    let json = br#"{
        "categories": ["chair"],
        "models": [
            {"id": "x", "name": "X", "path": "x.glb", "category": "mystery"}
        ]
    }"#;

    // Warned about, not rejected: the document is the source of truth.
    let catalog = ModelCatalog::from_json(json).expect("accepted");
    assert_eq!(catalog.models[0].category, "mystery");
}

#[test]
fn malformed_document_is_an_error() {
    let err = ModelCatalog::from_json(b"{ not json").expect_err("parse failure");
    assert!(matches!(err, DioramaError::Json(_)));

    let err = ModelCatalog::from_json(br#"{"categories": []}"#).expect_err("missing models");
    assert!(matches!(err, DioramaError::Json(_)));
}
