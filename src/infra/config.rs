//! Centralized configuration (environment variables + defaults).
//!
//! Every variable is optional; CLI flags take precedence over these values.

use anyhow::{bail, Context};

pub const IDENTIFIER_SUFFIXES_VAR: &str = "CONTENT_IDENTIFIER_SUFFIXES";
pub const FOLLOW_SYMLINKS_VAR: &str = "CONTENT_FOLLOW_SYMLINKS";

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "engine_content_validator=info,warn";

/// Loads `.env` if present. Missing files are fine.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

/// Suffix tokens accepted on `VehicleEngine.identifier` (comma-separated, default none).
pub fn identifier_suffixes() -> Vec<String> {
    std::env::var(IDENTIFIER_SUFFIXES_VAR)
        .map(|v| parse_list(&v))
        .unwrap_or_default()
}

/// Whether directory discovery follows symlinks (default false).
pub fn follow_symlinks() -> anyhow::Result<bool> {
    match std::env::var(FOLLOW_SYMLINKS_VAR) {
        Ok(v) => parse_bool(&v).with_context(|| format!("{} is invalid", FOLLOW_SYMLINKS_VAR)),
        Err(_) => Ok(false),
    }
}

pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
