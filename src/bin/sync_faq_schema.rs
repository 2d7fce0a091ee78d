use anyhow::Context;
use clap::Parser;

use engine_content_validator::domain::jsonld::sync_faq_schema;
use engine_content_validator::infra::config;
use engine_content_validator::storage;
use engine_content_validator::transport::cli::{self, SyncArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    let args = SyncArgs::parse();
    cli::init_tracing(args.verbose);

    let path = std::path::PathBuf::from(shellexpand::tilde(&args.file.to_string_lossy()).to_string());
    let mut file = storage::read_brand_file_async(&path).await?;
    let outcome = sync_faq_schema(&mut file.document, &file.stem);

    for (page, reason) in &outcome.skipped {
        eprintln!("  skipped {}: {}", page, reason);
    }
    if outcome.is_clean() {
        println!("> {}: FAQPage nodes already match faqs ({} pages)", path.display(), outcome.unchanged);
        return Ok(());
    }

    for page in &outcome.changed {
        println!("  {}", page);
    }
    if !args.write {
        println!(
            "> {} page(s) out of sync; re-run with --write to update {}",
            outcome.changed.len(),
            path.display()
        );
        std::process::exit(1);
    }

    let mut contents = serde_json::to_string_pretty(&file.document)?;
    contents.push('\n');
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("> Updated {} page(s) in {}", outcome.changed.len(), path.display());
    Ok(())
}
