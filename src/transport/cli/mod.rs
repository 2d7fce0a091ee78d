//! Command-line surface: argument definitions, log setup, and report rendering.

pub mod args;
pub mod report;

pub use args::{OutputFormat, SyncArgs, ValidateArgs};
pub use report::{render, render_json, render_text};

use crate::infra::config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout stays machine-readable.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "engine_content_validator=debug,warn"
    } else {
        config::DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
