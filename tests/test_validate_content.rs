//! Validation of a real brand file and of targeted edits to it.

use engine_content_validator::{
    cross_check_faq_parity, cross_check_identifier_consistency, cross_check_url_canonical_agreement,
    validate_brand_file, Category, JsonPath, Severity, SuffixNormalizer, Validator,
};
use serde_json::{json, Value};

fn isuzu() -> Value {
    serde_json::from_str(include_str!("fixtures/isuzu.json")).unwrap()
}

fn engine_path(code: &str) -> JsonPath {
    JsonPath::root().key("engines").entry(code)
}

#[test]
fn untouched_file_only_flags_the_suffixed_identifier() {
    let result = validate_brand_file(&isuzu());

    assert_eq!(result.count(Severity::Error), 0, "{:#?}", result);
    assert_eq!(result.len(), 1, "{:#?}", result);
    let finding = &result.findings()[0];
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.category, Category::ContentInconsistency);
    assert_eq!(finding.path, r#"engines["4ee2"].schema.@graph[4].identifier"#);
    assert!(finding.message.contains("4EE2-PETROL"));
}

#[test]
fn identifier_check_alone_yields_one_warning() {
    let doc = isuzu();
    let out = cross_check_identifier_consistency(
        "4ee2",
        &doc["engines"]["4ee2"],
        &SuffixNormalizer::default(),
        &engine_path("4ee2"),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out.count(Severity::Warning), 1);
}

#[test]
fn configured_suffix_clears_the_identifier_warning() {
    let validator = Validator::new(SuffixNormalizer::new(["PETROL"]));
    assert!(validator.validate_brand_file(&isuzu()).is_empty());
}

#[test]
fn dropped_faq_is_a_length_mismatch() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]["faqs"].as_array_mut().unwrap().pop();

    let parity = cross_check_faq_parity(&doc["engines"]["4ee1"], &engine_path("4ee1"));
    assert_eq!(parity.len(), 1);
    let finding = &parity.findings()[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.path, r#"engines["4ee1"].schema.@graph[6].mainEntity"#);
    assert!(finding.message.contains("6 entries"));
    assert!(finding.message.contains("has 7"));

    let result = validate_brand_file(&doc);
    assert_eq!(result.count(Severity::Error), 1);
}

#[test]
fn edited_answer_is_reported_at_its_index() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]["faqs"][3]["answer"] = json!("1-2-4-3.");

    let parity = cross_check_faq_parity(&doc["engines"]["4ee1"], &engine_path("4ee1"));
    assert_eq!(parity.len(), 1);
    assert_eq!(
        parity.findings()[0].path,
        r#"engines["4ee1"].schema.@graph[6].mainEntity[3]"#
    );
    assert!(parity.findings()[0].message.contains("answer differs"));
}

#[test]
fn diverging_dataset_url_names_both_fields() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]["schema"]["@graph"][5]["url"] =
        json!("https://www.enginecodes.example/isuzu/4ee1-specs");

    let out = cross_check_url_canonical_agreement(&doc["engines"]["4ee1"], &engine_path("4ee1"));
    assert_eq!(out.len(), 1);
    let finding = &out.findings()[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.path, r#"engines["4ee1"].schema.@graph[5].url"#);
    assert!(finding.message.contains("Dataset.url"));
    assert!(finding.message.contains("WebPage.url"));

    assert_eq!(validate_brand_file(&doc).count(Severity::Error), 1);
}

#[test]
fn missing_section_is_one_schema_error() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]
        .as_object_mut()
        .unwrap()
        .remove("compatibleModels");

    let result = validate_brand_file(&doc);
    let errors: Vec<_> = result.errors().collect();
    assert_eq!(errors.len(), 1, "{:#?}", result);
    assert_eq!(errors[0].category, Category::SchemaViolation);
    assert_eq!(errors[0].path, r#"engines["4ee1"].compatibleModels"#);
}

#[test]
fn empty_faqs_with_empty_faq_page_is_only_a_warning() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]["faqs"] = json!([]);
    doc["engines"]["4ee1"]["schema"]["@graph"][6]["mainEntity"] = json!([]);

    let result = Validator::new(SuffixNormalizer::new(["PETROL"])).validate_brand_file(&doc);
    assert_eq!(result.len(), 1, "{:#?}", result);
    assert_eq!(result.findings()[0].severity, Severity::Warning);
    assert_eq!(result.findings()[0].path, r#"engines["4ee1"].faqs"#);
}

#[test]
fn keyed_files_prefix_paths_with_the_brand() {
    let doc = json!({ "isuzu": isuzu() });
    let result = Validator::default().validate_document(&doc);
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.findings()[0].path,
        r#"pageData["isuzu"].engines["4ee2"].schema.@graph[4].identifier"#
    );
}

#[test]
fn malformed_citation_urls_surface_as_quality_warnings() {
    let mut doc = isuzu();
    doc["engines"]["4ee1"]["technicalSpecifications"]["engineSpecs"][0]["source"] =
        json!("Isuzu workshop manual, see www.isuzu.co.jp");
    doc["engines"]["4ee1"]["compatibleModels"]["models"][0]["OEM Source"] =
        json!("Parts catalogue https://isuzu/x");

    let result = Validator::new(SuffixNormalizer::new(["PETROL"])).validate_brand_file(&doc);
    assert_eq!(result.count(Severity::Error), 0, "{:#?}", result);
    let paths: Vec<&str> = result.warnings().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            r#"engines["4ee1"].technicalSpecifications.engineSpecs[0].source"#,
            r#"engines["4ee1"].compatibleModels.models[0]["OEM Source"]"#,
        ]
    );
    assert!(result
        .findings()
        .iter()
        .all(|f| f.category == Category::ContentQualityWarning));
    assert!(result.findings()[0].message.contains("www.isuzu.co.jp"));
    assert!(result.findings()[1].message.contains("https://isuzu/x"));
}

#[test]
fn brand_file_without_engines_reports_the_missing_field_at_the_root() {
    let mut doc = isuzu();
    let record = doc.as_object_mut().unwrap();
    let engines = record.remove("engines").unwrap();
    record.insert("engine".to_string(), engines);

    let result = Validator::default().validate_document(&doc);
    assert_eq!(result.len(), 1, "{:#?}", result);
    let finding = &result.findings()[0];
    assert_eq!(finding.severity, Severity::Error);
    assert_eq!(finding.category, Category::SchemaViolation);
    assert_eq!(finding.path, "engines");
    assert!(finding.message.contains("missing required field `engines`"));
}
