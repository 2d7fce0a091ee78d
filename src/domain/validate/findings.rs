//! Finding types collected by every validation pass.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Required field missing or wrong JSON type.
    SchemaViolation,
    /// Human-readable fields and the JSON-LD graph disagree.
    ContentInconsistency,
    /// Content is well-formed but suspicious (empty tables, odd citations).
    ContentQualityWarning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: Category,
    pub path: String,
    pub message: String,
}

impl Finding {
    pub fn error(category: Category, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(category: Category, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Ordered list of findings produced by one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    findings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn error(&mut self, category: Category, path: impl Into<String>, message: impl Into<String>) {
        self.push(Finding::error(category, path, message));
    }

    pub fn warning(&mut self, category: Category, path: impl Into<String>, message: impl Into<String>) {
        self.push(Finding::warning(category, path, message));
    }

    pub fn extend(&mut self, other: ValidationResult) {
        self.findings.extend(other.findings);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

impl IntoIterator for ValidationResult {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_split_by_severity() {
        let mut result = ValidationResult::new();
        result.error(Category::SchemaViolation, "engines", "missing");
        result.warning(Category::ContentQualityWarning, "engines[\"a\"].faqs", "empty");
        result.warning(Category::ContentInconsistency, "x", "y");

        assert_eq!(result.len(), 3);
        assert_eq!(result.count(Severity::Error), 1);
        assert_eq!(result.count(Severity::Warning), 2);
        assert!(result.has_errors());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let f = Finding::warning(Category::ContentQualityWarning, "p", "m");
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["severity"], "warning");
        assert_eq!(v["category"], "content_quality_warning");
    }
}
