use clap::Parser;
use std::path::PathBuf;

use engine_content_validator::app::{self, RunOptions};
use engine_content_validator::infra::config;
use engine_content_validator::transport::cli::{self, report::FATAL_LABEL, ValidateArgs};
use engine_content_validator::{SuffixNormalizer, Validator};

async fn run(args: ValidateArgs) -> anyhow::Result<i32> {
    // Flags win over the environment.
    let mut suffixes = args.identifier_suffixes.clone();
    if suffixes.is_empty() {
        suffixes = config::identifier_suffixes();
    }
    let follow_links = args.follow_symlinks || config::follow_symlinks()?;

    let root = PathBuf::from(shellexpand::tilde(&args.path.to_string_lossy()).to_string());
    let validator = Validator::new(SuffixNormalizer::new(&suffixes));
    let options = RunOptions {
        strict: args.strict,
        follow_links,
    };

    match app::run(&root, validator, options).await {
        Ok(report) => {
            print!("{}", cli::render(&report, args.format)?);
            Ok(report.exit_code())
        }
        Err(e) => {
            println!("{}\t{}\t$\t{}", FATAL_LABEL, root.display(), e);
            Ok(2)
        }
    }
}

#[tokio::main]
async fn main() {
    config::load_dotenv();
    let args = ValidateArgs::parse();
    cli::init_tracing(args.verbose);

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };
    std::process::exit(code);
}
