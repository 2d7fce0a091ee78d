//! Diagnostic paths such as `engines["4ee2"].schema.@graph[5]`.

use std::fmt;

/// A dotted/bracketed path into a brand record.
///
/// Plain identifiers (letters, digits, `_`, `@`) are joined with dots; map entries and
/// keys that would be ambiguous are written in quoted bracket form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPath(String);

impl JsonPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Start from an arbitrary prefix (e.g. `pageData["isuzu"]`).
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// Object field access.
    pub fn key(&self, name: &str) -> Self {
        if !is_plain_key(name) {
            return self.entry(name);
        }
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Keyed entry of an open map (always bracketed).
    pub fn entry(&self, key: &str) -> Self {
        let quoted = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{}\"", key));
        Self(format!("{}[{}]", self.0, quoted))
    }

    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    pub fn as_str(&self) -> &str {
        if self.0.is_empty() {
            "$"
        } else {
            &self.0
        }
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<JsonPath> for String {
    fn from(path: JsonPath) -> Self {
        path.as_str().to_string()
    }
}

impl From<&JsonPath> for String {
    fn from(path: &JsonPath) -> Self {
        path.as_str().to_string()
    }
}

fn is_plain_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
}
