//! `compatibleModels.extraNotes`: open attribute sets that must carry `key` and `Evidence`.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use super::shape::{check_citation_text, json_type_name};
use crate::domain::content::extra_notes::{EVIDENCE_FIELD, KEY_FIELD};
use serde_json::Value;

pub fn check_extra_notes(notes: &Value, path: &JsonPath, out: &mut ValidationResult) {
    let Some(entries) = notes.as_array() else {
        // Wrong type is reported by the engine shape pass.
        return;
    };

    for (i, entry) in entries.iter().enumerate() {
        let entry_path = path.index(i);
        let Some(map) = entry.as_object() else {
            out.error(
                Category::SchemaViolation,
                &entry_path,
                format!("expected object, found {}", json_type_name(entry)),
            );
            continue;
        };

        match map.get(KEY_FIELD) {
            Some(Value::String(_)) => {}
            Some(other) => out.error(
                Category::SchemaViolation,
                entry_path.key(KEY_FIELD),
                format!("expected string, found {}", json_type_name(other)),
            ),
            None => out.error(
                Category::SchemaViolation,
                entry_path.key(KEY_FIELD),
                format!("missing required field `{}`", KEY_FIELD),
            ),
        }

        if !map.contains_key(EVIDENCE_FIELD) {
            out.error(
                Category::SchemaViolation,
                entry_path.key(EVIDENCE_FIELD),
                format!("extra note is missing its `{}` field", EVIDENCE_FIELD),
            );
        }

        for (name, value) in map.iter().filter(|(name, _)| name.as_str() != KEY_FIELD) {
            let attr_path = entry_path.key(name);
            let is_evidence = name == EVIDENCE_FIELD;
            match value {
                Value::String(s) => {
                    if is_evidence {
                        check_citation_text(s, &attr_path, out);
                    }
                }
                Value::Array(items) => {
                    if is_evidence && items.is_empty() {
                        out.warning(
                            Category::ContentQualityWarning,
                            &attr_path,
                            "Evidence list is empty",
                        );
                    }
                    for (j, item) in items.iter().enumerate() {
                        match item.as_str() {
                            Some(s) if is_evidence => check_citation_text(s, &attr_path.index(j), out),
                            Some(_) => {}
                            None => out.error(
                                Category::SchemaViolation,
                                attr_path.index(j),
                                format!("expected string, found {}", json_type_name(item)),
                            ),
                        }
                    }
                }
                other => out.error(
                    Category::SchemaViolation,
                    &attr_path,
                    format!(
                        "expected string or array of strings, found {}",
                        json_type_name(other)
                    ),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::findings::Severity;
    use serde_json::json;

    fn run(notes: Value) -> ValidationResult {
        let mut out = ValidationResult::new();
        check_extra_notes(&notes, &JsonPath::root().key("extraNotes"), &mut out);
        out
    }

    #[test]
    fn well_formed_notes_pass() {
        let out = run(json!([
            { "key": "elf", "Note": "Some Elf trucks used 4EE1-T", "Evidence": "Isuzu parts catalogue 2006" },
            { "key": "opel", "Markets": ["EU", "UK"], "Evidence": ["Opel EPC", "https://www.opel.de/"] }
        ]));
        assert!(out.is_empty(), "{:?}", out);
    }

    #[test]
    fn missing_evidence_is_an_error() {
        let out = run(json!([{ "key": "elf", "Note": "x" }]));
        assert_eq!(out.count(Severity::Error), 1);
        assert_eq!(out.findings()[0].path, "extraNotes[0].Evidence");
    }

    #[test]
    fn non_string_attribute_values_are_errors() {
        let out = run(json!([{ "key": "elf", "Evidence": "e", "Count": 3, "List": ["a", 1] }]));
        assert_eq!(out.count(Severity::Error), 2);
    }

    #[test]
    fn evidence_urls_are_checked() {
        let out = run(json!([{ "key": "elf", "Evidence": "see www.isuzu.co.jp" }]));
        assert_eq!(out.count(Severity::Warning), 1);
    }
}
