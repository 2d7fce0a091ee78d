//! Typed loading of content directories.

use engine_content_validator::{ContentStore, InputError};
use std::fs;

const ISUZU: &str = include_str!("fixtures/isuzu.json");

#[test]
fn loads_bare_and_keyed_files() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("isuzu.json"), ISUZU).unwrap();
    let isuzu: serde_json::Value = serde_json::from_str(ISUZU).unwrap();
    let keyed = serde_json::json!({ "holden": isuzu });
    fs::create_dir_all(temp.path().join("more")).unwrap();
    fs::write(temp.path().join("more/brands.json"), keyed.to_string()).unwrap();

    let store = ContentStore::load_dir(temp.path()).unwrap();
    assert_eq!(store.brands(), vec!["holden", "isuzu"]);
    assert_eq!(store.engine_codes("isuzu"), vec!["4ee1", "4ee2"]);
    assert_eq!(store.len(), 4);

    let page = store.get("isuzu", "4ee1").unwrap();
    assert_eq!(page.faqs.len(), 7);
    assert_eq!(page.compatible_models.models[0].oem_source, "Isuzu parts catalogue 8-97");
    assert_eq!(page.compatible_models.extra_notes[0].key, "ECU");
    assert_eq!(page.schema.graph().nodes().len(), 7);
    assert!(store.get("isuzu", "4jj1").is_none());
}

#[test]
fn structural_mismatch_aborts_the_load() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("isuzu.json"), r#"{ "engines": { "4ee1": {} } }"#).unwrap();
    let err = ContentStore::load_dir(temp.path()).unwrap_err();
    assert!(matches!(err, InputError::Layout { .. }));
}
