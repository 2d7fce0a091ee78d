pub mod runner;

pub use runner::{run, validate_file, FileReport, Outcome, PageDigest, RunOptions, RunReport};
