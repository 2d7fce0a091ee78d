//! Discovery and loading of brand content files.

use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const CONTENT_EXTENSION: &str = "json";

/// Fatal problems with an input file. Content problems are findings, never `InputError`s.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input path '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}' is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("'{}' must hold a JSON object at the top level, found {found}", .path.display())]
    NotAnObject { path: PathBuf, found: &'static str },
    #[error("'{}' does not match the brand record layout: {source}", .path.display())]
    Layout {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed content file.
#[derive(Debug, Clone)]
pub struct BrandFile {
    pub path: PathBuf,
    /// File name without extension; the brand slug for bare layouts.
    pub stem: String,
    pub document: Value,
}

/// Lists content files under `root` (or `root` itself when it is a file), sorted by path.
pub fn discover(root: &Path, follow_links: bool) -> Result<Vec<PathBuf>, InputError> {
    if !root.exists() {
        return Err(InputError::NotFound(root.to_path_buf()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            InputError::Io {
                path,
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop")),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_content = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(CONTENT_EXTENSION));
        if is_content {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parses file contents already read from `path`.
pub fn parse_brand_file(path: &Path, contents: &str) -> Result<BrandFile, InputError> {
    let document: Value = serde_json::from_str(contents).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !document.is_object() {
        return Err(InputError::NotAnObject {
            path: path.to_path_buf(),
            found: crate::domain::validate::shape::json_type_name(&document),
        });
    }
    Ok(BrandFile {
        path: path.to_path_buf(),
        stem: file_stem(path),
        document,
    })
}

pub fn read_brand_file(path: &Path) -> Result<BrandFile, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    parse_brand_file(path, &contents)
}

pub async fn read_brand_file_async(path: &Path) -> Result<BrandFile, InputError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| io_error(path, source))?;
    parse_brand_file(path, &contents)
}

fn io_error(path: &Path, source: io::Error) -> InputError {
    if source.kind() == io::ErrorKind::NotFound {
        InputError::NotFound(path.to_path_buf())
    } else {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
