//! stdout rendering of a [`RunReport`].

use super::OutputFormat;
use crate::app::{FileReport, Outcome, RunReport};
use serde::Serialize;
use std::fmt::Write as _;

pub const FATAL_LABEL: &str = "fatal";

/// Tabs and newlines would break the line format.
fn field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}

/// `<severity>\t<file>\t<jsonPath>\t<message>` per finding, in file then discovery order.
pub fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    for file in &report.files {
        let name = file.file.display().to_string();
        if let Some(msg) = &file.fatal {
            let _ = writeln!(out, "{}\t{}\t$\t{}", FATAL_LABEL, field(&name), field(msg));
            continue;
        }
        for f in &file.findings {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}",
                f.severity,
                field(&name),
                field(&f.path),
                field(&f.message)
            );
        }
    }
    out
}

#[derive(Serialize)]
struct Summary {
    files: usize,
    errors: usize,
    warnings: usize,
    fatal: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: Outcome,
    exit_code: i32,
    strict: bool,
    summary: Summary,
    files: &'a [FileReport],
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    let doc = JsonReport {
        outcome: report.outcome(),
        exit_code: report.exit_code(),
        strict: report.strict,
        summary: Summary {
            files: report.files.len(),
            errors: report.errors(),
            warnings: report.warnings(),
            fatal: report.fatal_files(),
        },
        files: &report.files,
    };
    let mut s = serde_json::to_string_pretty(&doc)?;
    s.push('\n');
    Ok(s)
}

pub fn render(report: &RunReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}
