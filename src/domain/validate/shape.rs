//! Declarative shapes and the walker that checks JSON values against them.

use super::findings::{Category, ValidationResult};
use super::path::JsonPath;
use super::urls;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Expected JSON shape of a field.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Any string.
    Text,
    /// A string that must equal the given literal (e.g. `"@type": "Question"`).
    Literal(&'static str),
    /// Absolute `http(s)` URL; malformed values are warnings.
    Url,
    /// Site-relative path or absolute URL.
    ImageSrc,
    /// Free-text citation; embedded URLs are checked.
    Citation,
    /// ISO-8601 date or RFC 3339 timestamp.
    Date,
    /// String or number holding a numeric value (schema.org `QuantitativeValue.value`).
    Number,
    /// A schema.org reference: URL string or object carrying `@id`.
    Reference,
    /// schema.org `identifier`: plain text or a `PropertyValue` carrying `value`.
    Identifier,
    /// Object or array of objects (schema.org `author`, `creator`).
    Entity,
    /// Any object; inner structure is checked by a dedicated pass.
    Object,
    /// Any array; items are checked by a dedicated pass.
    Array,
    List {
        item: &'static Shape,
        /// Warn when the list is empty.
        expect_entries: bool,
    },
    /// Object with known fields; unknown fields are tolerated.
    Record(&'static [Field]),
    /// Open object whose values all follow one shape.
    Map(&'static Shape),
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: false,
        }
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn wrong_type(out: &mut ValidationResult, path: &JsonPath, expected: &str, got: &Value) {
    out.error(
        Category::SchemaViolation,
        path,
        format!("expected {}, found {}", expected, json_type_name(got)),
    );
}

/// Parses the date forms schema.org consumers accept. Returns the calendar date.
pub fn parse_schema_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

/// Checks `value` against `shape`, appending findings under `path`.
pub fn check(value: &Value, shape: &Shape, path: &JsonPath, out: &mut ValidationResult) {
    match shape {
        Shape::Text => {
            if !value.is_string() {
                wrong_type(out, path, "string", value);
            }
        }
        Shape::Literal(expected) => match value.as_str() {
            Some(s) if s == *expected => {}
            Some(s) => out.error(
                Category::SchemaViolation,
                path,
                format!("expected \"{}\", found \"{}\"", expected, s),
            ),
            None => wrong_type(out, path, "string", value),
        },
        Shape::Url => match value.as_str() {
            Some(s) => {
                if let Err(reason) = urls::check_absolute_url(s) {
                    out.warning(
                        Category::ContentQualityWarning,
                        path,
                        format!("malformed URL '{}': {}", s, reason),
                    );
                }
            }
            None => wrong_type(out, path, "URL string", value),
        },
        Shape::ImageSrc => match value.as_str() {
            Some(s) => {
                if let Err(reason) = urls::check_image_src(s) {
                    out.warning(
                        Category::ContentQualityWarning,
                        path,
                        format!("malformed image source '{}': {}", s, reason),
                    );
                }
            }
            None => wrong_type(out, path, "string", value),
        },
        Shape::Citation => match value.as_str() {
            Some(s) => check_citation_text(s, path, out),
            None => wrong_type(out, path, "string", value),
        },
        Shape::Date => match value.as_str() {
            Some(s) => {
                if parse_schema_date(s).is_none() {
                    out.warning(
                        Category::ContentQualityWarning,
                        path,
                        format!("'{}' is not an ISO-8601 date or RFC 3339 timestamp", s),
                    );
                }
            }
            None => wrong_type(out, path, "date string", value),
        },
        Shape::Number => match value {
            Value::Number(_) => {}
            Value::String(s) if s.trim().parse::<f64>().is_ok() => {}
            Value::String(s) => out.warning(
                Category::ContentQualityWarning,
                path,
                format!("'{}' is not numeric", s),
            ),
            other => wrong_type(out, path, "number", other),
        },
        Shape::Reference => match value {
            Value::String(s) => {
                if let Err(reason) = urls::check_absolute_url(s) {
                    out.warning(
                        Category::ContentQualityWarning,
                        path,
                        format!("malformed URL '{}': {}", s, reason),
                    );
                }
            }
            Value::Object(map) => match map.get("@id") {
                Some(id) => check(id, &Shape::Url, &path.key("@id"), out),
                None => out.error(
                    Category::SchemaViolation,
                    path.key("@id"),
                    "missing required field `@id`",
                ),
            },
            other => wrong_type(out, path, "URL string or object with @id", other),
        },
        Shape::Identifier => match value {
            Value::String(_) => {}
            Value::Object(map) => match map.get("value") {
                Some(Value::String(_)) | Some(Value::Number(_)) => {}
                Some(other) => wrong_type(out, &path.key("value"), "string or number", other),
                None => out.error(
                    Category::SchemaViolation,
                    path.key("value"),
                    "missing required field `value`",
                ),
            },
            other => wrong_type(out, path, "string or PropertyValue object", other),
        },
        Shape::Entity => match value {
            Value::Object(_) => {}
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_object() {
                        wrong_type(out, &path.index(i), "object", item);
                    }
                }
            }
            other => wrong_type(out, path, "object or array of objects", other),
        },
        Shape::Object => {
            if !value.is_object() {
                wrong_type(out, path, "object", value);
            }
        }
        Shape::Array => {
            if !value.is_array() {
                wrong_type(out, path, "array", value);
            }
        }
        Shape::List {
            item,
            expect_entries,
        } => match value.as_array() {
            Some(items) => {
                if items.is_empty() && *expect_entries {
                    out.warning(
                        Category::ContentQualityWarning,
                        path,
                        "list is empty; expected at least one entry",
                    );
                }
                for (i, entry) in items.iter().enumerate() {
                    check(entry, item, &path.index(i), out);
                }
            }
            None => wrong_type(out, path, "array", value),
        },
        Shape::Record(fields) => match value.as_object() {
            Some(map) => {
                for field in fields.iter() {
                    let field_path = path.key(field.name);
                    match map.get(field.name) {
                        None => {
                            if field.required {
                                out.error(
                                    Category::SchemaViolation,
                                    field_path,
                                    format!("missing required field `{}`", field.name),
                                );
                            }
                        }
                        Some(Value::Null) if !field.required => {}
                        Some(inner) => check(inner, &field.shape, &field_path, out),
                    }
                }
            }
            None => wrong_type(out, path, "object", value),
        },
        Shape::Map(inner) => match value.as_object() {
            Some(map) => {
                for (k, v) in map {
                    check(v, inner, &path.entry(k), out);
                }
            }
            None => wrong_type(out, path, "object", value),
        },
    }
}

pub(crate) fn check_citation_text(text: &str, path: &JsonPath, out: &mut ValidationResult) {
    for problem in urls::check_citation(text) {
        out.warning(
            Category::ContentQualityWarning,
            path,
            format!("suspicious citation URL {}", problem),
        );
    }
}
