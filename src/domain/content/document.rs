//! File layouts: a bare `BrandData` object or a `pageData` map of brand slug to `BrandData`.

use serde_json::Value;

/// Path prefix used for records inside a keyed file.
pub const KEYED_ROOT: &str = "pageData";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentLayout {
    /// The file itself is one brand record; the brand slug is the file stem.
    Bare,
    /// The file maps brand slugs to brand records.
    Keyed,
}

/// Top-level keys that only a brand record carries. Any one of them marks a bare file, so a
/// record missing `engines` is still reported against its own fields.
pub const BRAND_KEYS: [&str; 3] = ["engines", "researchResources", "heroImage"];

pub fn layout(doc: &Value) -> DocumentLayout {
    match doc.as_object() {
        Some(map) if BRAND_KEYS.iter().any(|k| map.contains_key(*k)) => DocumentLayout::Bare,
        _ => DocumentLayout::Keyed,
    }
}

/// `(brand slug, record)` pairs of a document, in file order.
pub fn brand_records<'a>(doc: &'a Value, file_stem: &'a str) -> Vec<(&'a str, &'a Value)> {
    match layout(doc) {
        DocumentLayout::Bare => vec![(file_stem, doc)],
        DocumentLayout::Keyed => doc
            .as_object()
            .map(|m| m.iter().map(|(k, v)| (k.as_str(), v)).collect())
            .unwrap_or_default(),
    }
}

/// Mutable counterpart of [`brand_records`].
pub fn brand_records_mut<'a>(doc: &'a mut Value, file_stem: &'a str) -> Vec<(&'a str, &'a mut Value)> {
    match layout(doc) {
        DocumentLayout::Bare => vec![(file_stem, doc)],
        DocumentLayout::Keyed => match doc.as_object_mut() {
            Some(m) => m.iter_mut().map(|(k, v)| (k.as_str(), v)).collect(),
            None => Vec::new(),
        },
    }
}
