use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per finding.
    #[default]
    Text,
    /// A single JSON report with digests and summary counts.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "validate-content")]
#[command(about = "Validate brand engine page content and its JSON-LD graph")]
#[command(
    after_help = "Exit status:\n  0  no errors (and no warnings with --strict)\n  1  errors found, or warnings with --strict\n  2  an input file could not be read or parsed\n\nEnvironment:\n  CONTENT_IDENTIFIER_SUFFIXES   Comma-separated identifier suffixes to ignore\n  CONTENT_FOLLOW_SYMLINKS       Follow symlinks while walking directories\n  RUST_LOG                      Log filter (logs go to stderr)"
)]
pub struct ValidateArgs {
    /// Content file or directory of content files.
    pub path: PathBuf,
    /// Treat warnings as failures.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Identifier suffix token ignored when comparing engine codes (repeatable).
    #[arg(long = "identifier-suffix", value_delimiter = ',', action = ArgAction::Append)]
    pub identifier_suffixes: Vec<String>,
    #[arg(long, default_value_t = false)]
    pub follow_symlinks: bool,
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(name = "sync-faq-schema")]
#[command(about = "Regenerate FAQPage.mainEntity from each engine page's faqs")]
pub struct SyncArgs {
    /// Content file to update.
    pub file: PathBuf,
    /// Rewrite the file in place. Without it only the pages that would change are listed.
    #[arg(long, default_value_t = false)]
    pub write: bool,
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
