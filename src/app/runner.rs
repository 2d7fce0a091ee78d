//! Validation run over a file or directory.
//!
//! Each discovered file is loaded and validated in its own task. A file that cannot be read
//! or parsed is recorded as fatal; the remaining files are still validated.

use crate::crypto::hashing::{document_digest, page_digest};
use crate::domain::content::document;
use crate::domain::validate::{Finding, Severity, Validator};
use crate::storage::{self, BrandFile, InputError};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Warnings fail the run.
    pub strict: bool,
    pub follow_links: bool,
}

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Clean,
    Failed,
    Fatal,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::Failed => 1,
            Outcome::Fatal => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageDigest {
    pub brand: String,
    pub engine: String,
    pub digest: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageDigest>,
    pub findings: Vec<Finding>,
    /// Set when the file could not be loaded; `findings` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatal: Option<String>,
}

impl FileReport {
    fn fatal(file: PathBuf, message: String) -> Self {
        Self {
            file,
            digest: None,
            pages: Vec::new(),
            findings: Vec::new(),
            fatal: Some(message),
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub strict: bool,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn errors(&self) -> usize {
        self.files.iter().map(|f| f.count(Severity::Error)).sum()
    }

    pub fn warnings(&self) -> usize {
        self.files.iter().map(|f| f.count(Severity::Warning)).sum()
    }

    pub fn fatal_files(&self) -> usize {
        self.files.iter().filter(|f| f.fatal.is_some()).count()
    }

    pub fn outcome(&self) -> Outcome {
        if self.fatal_files() > 0 {
            Outcome::Fatal
        } else if self.errors() > 0 || (self.strict && self.warnings() > 0) {
            Outcome::Failed
        } else {
            Outcome::Clean
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome().exit_code()
    }
}

/// Validates a loaded file and digests its pages.
pub fn validate_file(validator: &Validator, file: &BrandFile) -> FileReport {
    let findings = validator.validate_document(&file.document).into_findings();
    FileReport {
        file: file.path.clone(),
        digest: Some(document_digest(&file.document)),
        pages: page_digests(&file.document, &file.stem),
        findings,
        fatal: None,
    }
}

fn page_digests(doc: &Value, stem: &str) -> Vec<PageDigest> {
    let mut pages = Vec::new();
    for (brand, record) in document::brand_records(doc, stem) {
        let Some(engines) = record.get("engines").and_then(Value::as_object) else {
            continue;
        };
        for (code, page) in engines {
            pages.push(PageDigest {
                brand: brand.to_string(),
                engine: code.clone(),
                digest: page_digest(brand, code, page),
            });
        }
    }
    pages
}

/// Validates every content file under `root`.
///
/// Only a missing or unwalkable `root` is returned as an error; per-file failures are
/// reported in the [`RunReport`].
pub async fn run(root: &Path, validator: Validator, options: RunOptions) -> Result<RunReport, InputError> {
    let paths = storage::discover(root, options.follow_links)?;
    info!(root = %root.display(), files = paths.len(), "validating content files");

    let mut tasks = JoinSet::new();
    let mut task_paths = HashMap::new();
    for path in paths {
        let validator = validator.clone();
        let task_path = path.clone();
        let handle = tasks.spawn(async move {
            match storage::read_brand_file_async(&task_path).await {
                Ok(file) => validate_file(&validator, &file),
                Err(e) => FileReport::fatal(task_path, e.to_string()),
            }
        });
        task_paths.insert(handle.id(), path);
    }

    let mut files = Vec::with_capacity(task_paths.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        let report = match joined {
            Ok((_, report)) => report,
            Err(e) => {
                let path = task_paths.get(&e.id()).cloned().unwrap_or_default();
                FileReport::fatal(path, format!("validation task failed: {}", e))
            }
        };
        match &report.fatal {
            Some(msg) => warn!(file = %report.file.display(), "{}", msg),
            None => debug!(
                file = %report.file.display(),
                errors = report.count(Severity::Error),
                warnings = report.count(Severity::Warning),
                "validated"
            ),
        }
        files.push(report);
    }
    files.sort_by(|a, b| a.file.cmp(&b.file));

    let report = RunReport {
        strict: options.strict,
        files,
    };
    info!(
        errors = report.errors(),
        warnings = report.warnings(),
        fatal = report.fatal_files(),
        "validation finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate::{Category, Finding};

    fn report(strict: bool, findings: Vec<Finding>, fatal: Option<&str>) -> RunReport {
        RunReport {
            strict,
            files: vec![FileReport {
                file: PathBuf::from("isuzu.json"),
                digest: None,
                pages: Vec::new(),
                findings,
                fatal: fatal.map(str::to_string),
            }],
        }
    }

    #[test]
    fn exit_codes_follow_severity() {
        let warning = Finding::warning(Category::ContentQualityWarning, "$", "w");
        let error = Finding::error(Category::SchemaViolation, "$", "e");

        assert_eq!(report(false, vec![], None).exit_code(), 0);
        assert_eq!(report(false, vec![warning.clone()], None).exit_code(), 0);
        assert_eq!(report(true, vec![warning], None).exit_code(), 1);
        assert_eq!(report(false, vec![error], None).exit_code(), 1);
        assert_eq!(report(false, vec![], Some("bad json")).exit_code(), 2);
    }

    #[test]
    fn pages_are_digested_per_brand_and_engine() {
        let doc = serde_json::json!({ "engines": { "4ee1": {}, "4ee2": {} } });
        let pages = page_digests(&doc, "isuzu");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].brand, "isuzu");
        assert_ne!(pages[0].digest, pages[1].digest);
    }
}
