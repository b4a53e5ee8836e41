/// Tests for shared-asset merging: per-family counts, pool replacement,
/// font fixups, and the fatal malformed-asset path.
use crate::assets::merge_assets;
use crate::error::ImportError;
use serde_json::json;
use sketchport_document::{DocumentStore, SharedColor, SharedStyleEntry};
use sketchport_portable::PortableFile;

fn store() -> DocumentStore {
    DocumentStore::new("assets-tests")
}

fn document_file(value: serde_json::Value) -> PortableFile {
    serde_json::from_value(value).expect("valid portable document file")
}

#[test]
fn test_merge_reports_per_family_counts() {
    let mut store = store();
    let file = document_file(json!({
        "_class": "document",
        "assets": {"colors": [
            {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            {"red": 0.0, "green": 1.0, "blue": 0.0, "alpha": 1.0},
        ]},
        "layerTextStyles": {"objects": [{"name": "Heading", "value": {}}]},
        "layerStyles": {"objects": [{"name": "Card", "style": {}}]},
    }));

    let counts = merge_assets(&mut store, &file, false).unwrap();

    assert_eq!(counts.colors, 2);
    assert_eq!(counts.text_styles, 1);
    assert_eq!(counts.layer_styles, 1);
    assert_eq!(store.colors().len(), 2);
    assert_eq!(store.text_styles().len(), 1);
    assert_eq!(store.layer_styles().len(), 1);
}

#[test]
fn test_reset_first_discards_existing_pools() {
    let mut store = store();
    store.add_color(SharedColor::new(0.1, 0.2, 0.3, 1.0));
    store.add_text_style(SharedStyleEntry::new("Old", json!({})).unwrap());
    store.add_layer_style(SharedStyleEntry::new("Old", json!({})).unwrap());

    let file = document_file(json!({
        "_class": "document",
        "assets": {"colors": [
            {"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
            {"red": 0.0, "green": 1.0, "blue": 0.0, "alpha": 1.0},
        ]},
        "layerTextStyles": {"objects": [{"name": "Heading", "value": {}}]},
    }));

    merge_assets(&mut store, &file, true).unwrap();

    // Pre-existing entries are gone; exactly the merged ones remain
    assert_eq!(store.colors().len(), 2);
    assert_eq!(store.text_styles().len(), 1);
    assert_eq!(store.text_styles()[0].name, "Heading");
    assert!(store.layer_styles().is_empty());
}

#[test]
fn test_merge_without_reset_appends() {
    let mut store = store();
    store.add_color(SharedColor::new(0.1, 0.2, 0.3, 1.0));

    let file = document_file(json!({
        "_class": "document",
        "assets": {"colors": [{"red": 1.0, "green": 1.0, "blue": 1.0, "alpha": 1.0}]},
    }));

    let counts = merge_assets(&mut store, &file, false).unwrap();

    assert_eq!(counts.colors, 1);
    assert_eq!(store.colors().len(), 2);
}

#[test]
fn test_malformed_color_aborts_merge() {
    let mut store = store();
    let file = document_file(json!({
        "_class": "document",
        "assets": {"colors": [
            {"red": 0.5, "green": 0.5, "blue": 0.5, "alpha": 1.0},
            {"red": 2.0, "green": 0.0, "blue": 0.0, "alpha": 1.0},
        ]},
        "layerTextStyles": {"objects": [{"name": "Heading", "value": {}}]},
    }));

    let err = merge_assets(&mut store, &file, false).unwrap_err();

    assert!(matches!(
        err,
        ImportError::MalformedAsset { family: "color", .. }
    ));
    // No isolation on this path: the merge stopped where it failed
    assert_eq!(store.colors().len(), 1);
    assert!(store.text_styles().is_empty());
}

#[test]
fn test_text_styles_get_font_fixup() {
    let mut store = store();
    let file = document_file(json!({
        "_class": "document",
        "layerTextStyles": {"objects": [{
            "name": "Body",
            "value": {"textStyle": {"encodedAttributes": {}}},
        }]},
    }));

    merge_assets(&mut store, &file, false).unwrap();

    let entry = &store.text_styles()[0];
    let font = entry
        .value
        .pointer("/textStyle/encodedAttributes/MSAttributedStringFontAttribute")
        .expect("font attribute repaired in");
    assert_eq!(font["_class"], "fontDescriptor");
    assert_eq!(font["attributes"]["size"], 14);
}
