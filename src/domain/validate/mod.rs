//! Content schema validator.
//!
//! Validation is a pure function over a parsed JSON document. Problems with the content are
//! collected as [`Finding`]s; nothing here returns an error for malformed content.
//!
//! Passes, per brand record:
//! - brand-level shape (`researchResources`, `heroImage`, `engines`)
//! - engine page shape (required sub-objects and their nested fields)
//! - `extraNotes` conventions
//! - JSON-LD graph shape (`@context`, `@graph`, schema.org attribute sets)
//! - cross-checks: FAQ parity, identifier consistency, canonical URL agreement

pub mod canonical;
pub mod faq;
pub mod findings;
pub mod graph;
pub mod identifier;
pub mod notes;
pub mod path;
pub mod schema;
pub mod shape;
pub mod urls;

pub use canonical::cross_check_url_canonical_agreement;
pub use faq::cross_check_faq_parity;
pub use findings::{Category, Finding, Severity, ValidationResult};
pub use identifier::{cross_check_identifier_consistency, IdentifierNormalizer, SuffixNormalizer};
pub use path::JsonPath;

use crate::domain::content::document::{self, DocumentLayout};
use serde_json::Value;
use shape::{json_type_name, Shape};
use std::sync::Arc;

/// Validator configuration shared by every file of a run.
#[derive(Clone)]
pub struct Validator {
    identifiers: Arc<dyn IdentifierNormalizer>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(SuffixNormalizer::default())
    }
}

impl Validator {
    pub fn new<N: IdentifierNormalizer + 'static>(identifiers: N) -> Self {
        Self {
            identifiers: Arc::new(identifiers),
        }
    }

    /// Validates one `BrandData` record. Paths are rooted at the record (`engines[...]`).
    pub fn validate_brand_file(&self, record: &Value) -> ValidationResult {
        self.validate_brand_at(record, &JsonPath::root())
    }

    /// Validates a whole file: a bare `BrandData` object, or a `pageData`-style map of brand
    /// slug to `BrandData` (paths are then prefixed with `pageData["<slug>"]`).
    pub fn validate_document(&self, doc: &Value) -> ValidationResult {
        match document::layout(doc) {
            DocumentLayout::Bare => self.validate_brand_file(doc),
            DocumentLayout::Keyed => {
                let mut out = ValidationResult::new();
                let root = JsonPath::from_prefix(document::KEYED_ROOT);
                let Some(brands) = doc.as_object() else {
                    out.error(
                        Category::SchemaViolation,
                        &root,
                        format!("expected object, found {}", json_type_name(doc)),
                    );
                    return out;
                };
                if brands.is_empty() {
                    out.error(Category::SchemaViolation, &root, "file defines no brands");
                }
                for (slug, record) in brands {
                    out.extend(self.validate_brand_at(record, &root.entry(slug)));
                }
                out
            }
        }
    }

    pub fn validate_brand_at(&self, record: &Value, path: &JsonPath) -> ValidationResult {
        let mut out = ValidationResult::new();
        let Some(map) = record.as_object() else {
            out.error(
                Category::SchemaViolation,
                path,
                format!("expected brand object, found {}", json_type_name(record)),
            );
            return out;
        };

        shape::check(record, &Shape::Record(schema::BRAND), path, &mut out);

        let engines_path = path.key("engines");
        match map.get("engines") {
            None => out.error(
                Category::SchemaViolation,
                &engines_path,
                "missing required field `engines`",
            ),
            Some(Value::Object(engines)) if engines.is_empty() => out.error(
                Category::SchemaViolation,
                &engines_path,
                "engines must contain at least one engine page",
            ),
            Some(Value::Object(engines)) => {
                for (code, engine) in engines {
                    out.extend(self.validate_engine(code, engine, &engines_path.entry(code)));
                }
            }
            Some(other) => out.error(
                Category::SchemaViolation,
                &engines_path,
                format!("expected object, found {}", json_type_name(other)),
            ),
        }
        out
    }

    /// Validates one engine page and runs every cross-check on it.
    pub fn validate_engine(&self, engine_code: &str, engine: &Value, path: &JsonPath) -> ValidationResult {
        let mut out = ValidationResult::new();
        if !engine.is_object() {
            out.error(
                Category::SchemaViolation,
                path,
                format!("expected engine page object, found {}", json_type_name(engine)),
            );
            return out;
        }

        shape::check(engine, &Shape::Record(schema::ENGINE), path, &mut out);

        if let Some(extra) = engine
            .get("compatibleModels")
            .and_then(|c| c.get("extraNotes"))
        {
            notes::check_extra_notes(
                extra,
                &path.key("compatibleModels").key("extraNotes"),
                &mut out,
            );
        }
        if let Some(schema_value) = engine.get("schema") {
            graph::check_schema(schema_value, &path.key("schema"), &mut out);
        }

        out.extend(cross_check_faq_parity(engine, path));
        out.extend(cross_check_identifier_consistency(
            engine_code,
            engine,
            self.identifiers.as_ref(),
            path,
        ));
        out.extend(cross_check_url_canonical_agreement(engine, path));
        out
    }
}

/// [`Validator::validate_brand_file`] with the default identifier policy.
pub fn validate_brand_file(record: &Value) -> ValidationResult {
    Validator::default().validate_brand_file(record)
}
